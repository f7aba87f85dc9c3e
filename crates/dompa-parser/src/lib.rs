//! dompa Parser
//!
//! Parses HTML-like markup into a tree of [`Node`]s and provides the
//! operations over it: [`traverse`] to rewrite a tree and [`find`] to search
//! one. Parsing is permissive: unclosed and crossed tags are recovered from,
//! and only a close tag that matches nothing is an error.
//!
//! # Example
//!
//! ```
//! use dompa_parser::{find, parse};
//!
//! let nodes = parse("<div><h1>Title</h1><p>Content</p></div>").unwrap();
//! let headings = find(&nodes, |n| n.name() == Some("h1"));
//! assert_eq!(headings[0].children()[0].value(), Some("Title"));
//! ```

pub mod attributes;
pub mod node;
pub mod parser;
pub mod traverse;

pub use dompa_scanner::VoidElements;
pub use node::{AttrValue, Attributes, ElementNode, FragmentNode, Node, TextNode, VoidNode};
pub use parser::{ParseOptions, Parser};
pub use traverse::{find, traverse, traverse_owned};

use dompa_scanner::ScanError;

/// Parser error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A close tag with no unclosed open tag of the same name.
    #[error("Could not find matching node for <{name}> (close tag at byte {offset})")]
    UnmatchedCloseTag { name: String, offset: usize },
}

impl ParseError {
    /// Name of the tag that caused the error.
    pub fn tag_name(&self) -> &str {
        match self {
            ParseError::UnmatchedCloseTag { name, .. } => name,
        }
    }
}

impl From<ScanError> for ParseError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::UnmatchedCloseTag { name, offset } => {
                ParseError::UnmatchedCloseTag { name, offset }
            }
        }
    }
}

/// Parse `markup` into a node tree with the default options.
pub fn parse(markup: &str) -> Result<Vec<Node>, ParseError> {
    Parser::parse(markup)
}
