//! # astdump
//!
//! Renders an in-memory syntax tree into an indented, human-readable text
//! dump, for debugging and golden-file testing of a source parser's
//! output.
//!
//! The tree itself comes from an external collaborator implementing
//! [`SourceParser`]; every node satisfies the [`TreeNode`] capability
//! contract. The engine walks the tree recursively: each node gets a
//! `kind: label` header line, then either a registered per-kind
//! [`NodeHandler`] expands it, or the default traversal recurses into its
//! generic children one level deeper.
//!
//! ```no_run
//! # use astdump::Dump;
//! # fn demo<P: astdump::SourceParser>(cache: P::Cache, parser: P) -> anyhow::Result<()> {
//! let mut dump = Dump::new(cache, parser);
//! dump.set_indent(4);
//! let text = dump.dump("src/lib.php".as_ref(), false)?;
//! print!("{text}");
//! # Ok(())
//! # }
//! ```

pub mod dump;
pub mod error;
pub mod format;
pub mod handler;
pub mod node;
pub mod settings;
pub mod source;


pub use dump::Dump;
pub use error::DumpError;
pub use format::{Format, Indent};
pub use handler::{Emit, HandlerEntry, HandlerRegistry, IdentitySet, NamespaceHandler, NodeHandler};
pub use node::{display_kind, label, NamespaceNode, TreeNode};
pub use settings::DumpSettings;
pub use source::SourceParser;
