use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use tracing::debug;

use crate::error::DumpError;
use crate::format::{Format, Indent};
use crate::handler::{Emit, HandlerEntry, HandlerRegistry, NodeHandler};
use crate::node::{self, TreeNode};
use crate::settings::DumpSettings;
use crate::source::SourceParser;

/// The dump engine.
///
/// Owns the formatting configuration and the handler registry, and drives
/// the external source parser to turn a file into top-level nodes before
/// rendering them. Constructed from the parser collaborator and its cache
/// storage; the cache is handed back to the parser on every parse and
/// never touched here.
pub struct Dump<P: SourceParser> {
    cache: P::Cache,
    parser: P,
    format: Format,
    registry: HandlerRegistry,
}

impl<P: SourceParser> Dump<P> {
    pub fn new(cache: P::Cache, parser: P) -> Self {
        Self {
            cache,
            parser,
            format: Format::default(),
            registry: HandlerRegistry::with_defaults(),
        }
    }

    /// Set the indentation unit: a literal string or a number of spaces.
    pub fn set_indent(&mut self, indent: impl Into<Indent>) {
        self.format.indent = indent.into().resolve();
    }

    /// Set the line terminator, such as `"\n"` or `"\r\n"`.
    pub fn set_end_of_line(&mut self, end_of_line: impl Into<String>) {
        self.format.end_of_line = end_of_line.into();
    }

    /// Apply TOML-backed settings onto the format configuration.
    pub fn apply_settings(&mut self, settings: &DumpSettings) {
        self.format = settings.to_format();
    }

    /// Replace the handler registry.
    ///
    /// Fails with [`DumpError::InvalidHandler`] when an entry names an
    /// unknown handler kind; the previous registry stays in effect.
    pub fn set_handlers(
        &mut self,
        handlers: HashMap<String, HandlerEntry>,
    ) -> Result<(), DumpError> {
        self.registry.replace(handlers)
    }

    /// Current node-kind to handler mapping.
    pub fn handlers(&self) -> &HashMap<String, HandlerEntry> {
        self.registry.entries()
    }

    /// Resolved handler for a node kind, or `None` if unregistered.
    ///
    /// A kind registered as a handler-kind identifier is instantiated on
    /// first use and memoized for the lifetime of this engine.
    pub fn handler(&self, node_kind: &str) -> Option<Rc<dyn NodeHandler>> {
        self.registry.resolve(node_kind)
    }

    /// Obtain the top-level nodes for a file from the source parser.
    pub fn parse(
        &mut self,
        file: &Path,
        ignore_annotations: bool,
    ) -> Result<Vec<Rc<dyn TreeNode>>> {
        self.parser.parse(&mut self.cache, file, ignore_annotations)
    }

    /// Dump a file as an ordered sequence of fully formatted lines.
    pub fn lines(&mut self, file: &Path, ignore_annotations: bool) -> Result<Vec<String>> {
        debug!(file = %file.display(), ignore_annotations, "dumping source file");

        let nodes = self.parse(file, ignore_annotations)?;
        let mut out = Vec::new();

        for node in &nodes {
            self.node_lines(node, 0, &mut out);
        }

        Ok(out)
    }

    /// Dump a file as a single string.
    pub fn dump(&mut self, file: &Path, ignore_annotations: bool) -> Result<String> {
        Ok(self.lines(file, ignore_annotations)?.concat())
    }

    /// Whether the value satisfies the node contract, i.e. exposes at
    /// least one of the two label capabilities.
    pub fn is_node(&self, node: &dyn TreeNode) -> bool {
        node.image().is_some() || node.name().is_some()
    }

    pub fn assert_node(&self, node: &dyn TreeNode) -> Result<(), DumpError> {
        if self.is_node(node) {
            Ok(())
        } else {
            Err(DumpError::NotANode {
                kind: node.kind().to_string(),
            })
        }
    }

    /// Render one node (and everything below it) starting at `depth`.
    pub fn dump_node(&self, node: &Rc<dyn TreeNode>, depth: usize) -> Result<String, DumpError> {
        self.assert_node(node.as_ref())?;

        let mut out = Vec::new();
        self.node_lines(node, depth, &mut out);
        Ok(out.concat())
    }

    /// Generic child enumeration; empty for nodes without the capability.
    pub fn children_of(&self, node: &dyn TreeNode) -> Vec<Rc<dyn TreeNode>> {
        node.children().unwrap_or_default()
    }

    fn node_lines(&self, node: &Rc<dyn TreeNode>, depth: usize, out: &mut Vec<String>) {
        let header = format!(
            "{}: {}",
            node::display_kind(node.kind()),
            node::label(node.as_ref())
        );
        out.push(self.format.line(depth, &header));

        if let Some(handler) = self.registry.resolve(node.kind()) {
            for emit in handler.expand(node.as_ref()) {
                match emit {
                    Emit::Node(delta, child) => self.node_lines(&child, depth + delta, out),
                    Emit::Text(delta, text) => out.push(self.format.line(depth + delta, &text)),
                }
            }

            return;
        }

        for child in self.children_of(node.as_ref()) {
            self.node_lines(&child, depth + 1, out);
        }
    }
}
