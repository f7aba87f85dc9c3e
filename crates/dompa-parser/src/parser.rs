//! Markup parser.
//!
//! Runs the scanner, nests the fragments by containment, then materializes
//! each fragment into a [`Node`]:
//!
//! ```text
//! source → Scanner → flat fragments → tree::build → fragment tree → Vec<Node>
//! ```

use dompa_scanner::{fragment_tree, Fragment, FragmentKind, VoidElements};

use crate::attributes;
use crate::node::Node;
use crate::ParseError;

/// Parser configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Tag names that are self-closing. Compared case-insensitively.
    pub void_elements: VoidElements,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `name` as a void element in addition to the current set.
    pub fn with_void_element(mut self, name: &str) -> Self {
        self.void_elements.insert(name);
        self
    }

    /// Replace the void element set.
    pub fn with_void_elements(mut self, void_elements: VoidElements) -> Self {
        self.void_elements = void_elements;
        self
    }
}

/// dompa markup parser.
pub struct Parser<'a> {
    source: &'a str,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Create a parser with the default options.
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: &'a str, options: ParseOptions) -> Self {
        Self { source, options }
    }

    /// Parse `source` into a node tree with the default options.
    pub fn parse(source: &str) -> Result<Vec<Node>, ParseError> {
        Parser::new(source).parse_nodes()
    }

    /// Parse into a node tree.
    ///
    /// Fails only on a close tag without a matching open tag; any other
    /// malformed markup still produces a tree.
    pub fn parse_nodes(&self) -> Result<Vec<Node>, ParseError> {
        let fragments = fragment_tree(self.source, &self.options.void_elements)?;
        Ok(self.materialize(fragments))
    }

    fn materialize(&self, fragments: Vec<Fragment>) -> Vec<Node> {
        fragments
            .into_iter()
            .map(|fragment| self.node(fragment))
            .collect()
    }

    fn node(&self, fragment: Fragment) -> Node {
        let span = fragment.span;

        match fragment.kind {
            FragmentKind::Text => Node::text(&self.source[span.start..span.end]),
            FragmentKind::Tag(name) if self.options.void_elements.contains(&name) => {
                Node::void(name, attributes::from_tag(self.source, span.start))
            }
            FragmentKind::Tag(name) => Node::element(
                name,
                attributes::from_tag(self.source, span.start),
                self.materialize(fragment.children),
            ),
        }
    }
}
