use std::path::Path;
use std::rc::Rc;

use anyhow::Result;

use crate::node::TreeNode;

/// External parser/builder collaborator: turns a source file into an
/// ordered sequence of top-level tree nodes (conventionally namespace-like
/// groupings).
///
/// The collaborator's cache storage is supplied to the engine at
/// construction time and handed back on every parse. It is opaque here:
/// the dumper never inspects or mutates it.
#[cfg_attr(test, mockall::automock(type Cache = ();))]
pub trait SourceParser {
    /// Cache storage threaded through to the parser backend.
    type Cache;

    /// Parse `file` and return its top-level nodes in source order.
    ///
    /// Errors (malformed source, I/O failures) surface unchanged to the
    /// dump caller.
    fn parse(
        &mut self,
        cache: &mut Self::Cache,
        file: &Path,
        ignore_annotations: bool,
    ) -> Result<Vec<Rc<dyn TreeNode>>>;
}
