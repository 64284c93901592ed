use std::collections::HashSet;
use std::rc::Rc;

use crate::node::TreeNode;

/// Identity-keyed set of tree nodes.
///
/// Membership is keyed on the `Rc` allocation address, never on structural
/// equality: two structurally identical but distinct nodes are distinct
/// members. Instantiated fresh for each expansion that needs one and
/// discarded afterwards.
#[derive(Default)]
pub struct IdentitySet {
    seen: HashSet<usize>,
}

impl IdentitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, node: &Rc<dyn TreeNode>) -> bool {
        self.seen.contains(&Self::key(node))
    }

    /// Returns `false` if the node was already present.
    pub fn insert(&mut self, node: &Rc<dyn TreeNode>) -> bool {
        self.seen.insert(Self::key(node))
    }

    fn key(node: &Rc<dyn TreeNode>) -> usize {
        Rc::as_ptr(node) as *const () as usize
    }
}
