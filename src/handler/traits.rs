use std::rc::Rc;

use crate::node::TreeNode;

/// One element yielded by a handler expansion. The `usize` is a
/// non-negative indent offset relative to the depth of the node being
/// expanded.
pub enum Emit {
    /// A nested node, recursively rendered by the engine at
    /// `depth + delta`.
    Node(usize, Rc<dyn TreeNode>),
    /// A literal line rendered as-is at `depth + delta`.
    Text(usize, String),
}

/// Per-node-kind rendering strategy.
///
/// A handler expands a node into the lines and nested nodes printed below
/// the node's own header line. Handlers are stateless, must not mutate the
/// node, and may return an empty expansion. When a handler is registered
/// for a node's kind the engine consumes its expansion instead of
/// enumerating the node's generic children.
pub trait NodeHandler {
    fn expand(&self, node: &dyn TreeNode) -> Vec<Emit>;
}
