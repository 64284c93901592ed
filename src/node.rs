use std::rc::Rc;

/// Structural prefix carried by concrete node kinds, e.g. `AstClass`.
/// Stripped before a kind is shown in a header line.
pub const KIND_PREFIX: &str = "Ast";

/// Kind identifier reported by namespace nodes.
pub const NAMESPACE_KIND: &str = "AstNamespace";

/// One element of the externally supplied syntax tree.
///
/// The tree is produced and owned by the source parser; the dumper only
/// reads it. A node advertises its capabilities through the optional
/// methods: the two label capabilities ([`TreeNode::image`] for syntax
/// nodes, [`TreeNode::name`] for named artifacts), an ordered child
/// enumeration consumed by the default traversal, and the namespace probe
/// consumed by the namespace handler. A value exposing neither label
/// capability fails the node contract and is rejected by the engine.
pub trait TreeNode {
    /// Concrete kind identifier, e.g. `AstNamespace` or `AstClass`.
    fn kind(&self) -> &str;

    /// Source image of a syntax node.
    fn image(&self) -> Option<String> {
        None
    }

    /// Declared name of an artifact.
    fn name(&self) -> Option<String> {
        None
    }

    /// Ordered child nodes. `None` means the node does not expose child
    /// enumeration at all, which is distinct from having no children.
    fn children(&self) -> Option<Vec<Rc<dyn TreeNode>>> {
        None
    }

    /// Capability probe for namespace-shaped nodes.
    fn as_namespace(&self) -> Option<&dyn NamespaceNode> {
        None
    }
}

/// Capability contract of a namespace node: five named member collections.
///
/// The `types` collection is a superset alias of interfaces, classes and
/// traits, so members surface through more than one collection. Collections
/// hand out clones of the shared `Rc` handles; aliasing is what the
/// namespace handler's dedup set keys on.
pub trait NamespaceNode: TreeNode {
    fn interfaces(&self) -> Vec<Rc<dyn TreeNode>>;

    fn functions(&self) -> Vec<Rc<dyn TreeNode>>;

    fn classes(&self) -> Vec<Rc<dyn TreeNode>>;

    fn traits(&self) -> Vec<Rc<dyn TreeNode>>;

    fn types(&self) -> Vec<Rc<dyn TreeNode>>;
}

/// Display form of a node kind: the structural prefix is stripped and the
/// first character lower-cased, so `AstFieldDeclaration` renders as
/// `fieldDeclaration`.
pub fn display_kind(kind: &str) -> String {
    let stripped = kind.strip_prefix(KIND_PREFIX).unwrap_or(kind);
    let mut chars = stripped.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Display label of a node: the image of a syntax node, falling back to the
/// artifact name.
pub fn label(node: &dyn TreeNode) -> String {
    node.image().or_else(|| node.name()).unwrap_or_default()
}
