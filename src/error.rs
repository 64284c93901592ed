use thiserror::Error;

/// Errors raised by the dump engine itself.
///
/// Failures coming from the external source parser are not wrapped in this
/// type; they propagate unchanged through the `anyhow::Result` surfaces.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The value handed to [`crate::Dump::dump_node`] does not satisfy the
    /// tree-node contract: it exposes neither of the two label
    /// capabilities.
    #[error("given {kind} is neither a syntax node exposing an image nor a named artifact exposing a name")]
    NotANode { kind: String },

    /// A registry entry names a handler kind that does not implement the
    /// `NodeHandler` contract.
    #[error("handler registered for {node_kind} is not a NodeHandler instance or a known handler kind")]
    InvalidHandler { node_kind: String },
}
