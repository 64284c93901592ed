use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::trace;

use crate::error::DumpError;
use crate::handler::namespace::NamespaceHandler;
use crate::handler::traits::NodeHandler;
use crate::node;

/// A registry value: either a ready handler instance or the identifier of
/// a handler kind, instantiated on first use.
#[derive(Clone)]
pub enum HandlerEntry {
    Instance(Rc<dyn NodeHandler>),
    Kind(String),
}

impl HandlerEntry {
    /// Entry for a built-in handler kind.
    pub fn kind(id: &str) -> Self {
        HandlerEntry::Kind(id.to_string())
    }
}

fn is_known_kind(id: &str) -> bool {
    id == NamespaceHandler::KIND
}

fn instantiate(id: &str) -> Option<Rc<dyn NodeHandler>> {
    if id == NamespaceHandler::KIND {
        return Some(Rc::new(NamespaceHandler));
    }

    None
}

/// Mapping from node kind to handler, with lazy instantiation.
///
/// `Kind` entries are instantiated once and memoized keyed by the handler
/// kind identifier, so two node kinds registered against the same handler
/// kind resolve to the identical instance. The memo cache belongs to this
/// registry (and therefore to one engine); separate engines never share
/// instances.
pub struct HandlerRegistry {
    entries: HashMap<String, HandlerEntry>,
    instances: RefCell<HashMap<String, Rc<dyn NodeHandler>>>,
}

impl HandlerRegistry {
    /// Registry with the default mapping: namespace nodes are expanded by
    /// the namespace handler.
    pub fn with_defaults() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            node::NAMESPACE_KIND.to_string(),
            HandlerEntry::kind(NamespaceHandler::KIND),
        );

        Self {
            entries,
            instances: RefCell::new(HashMap::new()),
        }
    }

    /// Replace the whole mapping.
    ///
    /// Fails with a configuration error naming the offending node-kind key
    /// when a `Kind` entry names no known handler kind. The previous
    /// mapping is kept intact in that case.
    pub fn replace(&mut self, entries: HashMap<String, HandlerEntry>) -> Result<(), DumpError> {
        for (node_kind, entry) in &entries {
            if let HandlerEntry::Kind(id) = entry {
                if !is_known_kind(id) {
                    return Err(DumpError::InvalidHandler {
                        node_kind: node_kind.clone(),
                    });
                }
            }
        }

        self.entries = entries;
        Ok(())
    }

    /// Current mapping, read-only.
    pub fn entries(&self) -> &HashMap<String, HandlerEntry> {
        &self.entries
    }

    /// Resolve the handler for a node kind, or `None` if unregistered.
    pub fn resolve(&self, node_kind: &str) -> Option<Rc<dyn NodeHandler>> {
        match self.entries.get(node_kind)? {
            HandlerEntry::Instance(handler) => Some(Rc::clone(handler)),
            HandlerEntry::Kind(id) => {
                let mut instances = self.instances.borrow_mut();

                if let Some(handler) = instances.get(id) {
                    return Some(Rc::clone(handler));
                }

                trace!(node_kind, handler_kind = %id, "instantiating handler");
                let handler = instantiate(id)?;
                instances.insert(id.clone(), Rc::clone(&handler));
                Some(handler)
            }
        }
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
