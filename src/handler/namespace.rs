use std::rc::Rc;

use crate::handler::dedup::IdentitySet;
use crate::handler::traits::{Emit, NodeHandler};
use crate::node::TreeNode;

/// Handler for namespace nodes.
///
/// A namespace exposes five member collections, and `types` is a superset
/// alias of interfaces, classes and traits. Expanding the collections
/// naively would print every type twice, once under its specific
/// collection and again under `types`, so one dedup set is shared across
/// all five collections: a member already emitted is skipped wherever it
/// surfaces again. Collections are expanded in a fixed order, each under a
/// `<collection>:` header that is only emitted when the collection
/// contributes at least one surviving member.
#[derive(Debug, Default)]
pub struct NamespaceHandler;

impl NamespaceHandler {
    /// Identifier under which this handler is registered as a lazily
    /// instantiated kind.
    pub const KIND: &'static str = "namespace";

    fn collection(
        name: &str,
        members: Vec<Rc<dyn TreeNode>>,
        seen: &mut IdentitySet,
        out: &mut Vec<Emit>,
    ) {
        let mut first = true;

        for member in members {
            if seen.contains(&member) {
                continue;
            }

            if first {
                out.push(Emit::Text(1, format!("{name}:")));
                first = false;
            }

            seen.insert(&member);
            out.push(Emit::Node(2, member));
        }
    }
}

impl NodeHandler for NamespaceHandler {
    fn expand(&self, node: &dyn TreeNode) -> Vec<Emit> {
        let Some(namespace) = node.as_namespace() else {
            return Vec::new();
        };

        let mut seen = IdentitySet::new();
        let mut out = Vec::new();

        Self::collection("interfaces", namespace.interfaces(), &mut seen, &mut out);
        Self::collection("functions", namespace.functions(), &mut seen, &mut out);
        Self::collection("classes", namespace.classes(), &mut seen, &mut out);
        Self::collection("traits", namespace.traits(), &mut seen, &mut out);
        Self::collection("types", namespace.types(), &mut seen, &mut out);

        out
    }
}
