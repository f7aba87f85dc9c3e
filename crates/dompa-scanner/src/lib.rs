//! dompa Scanner
//!
//! Turns markup into a flat list of position-tagged fragments, then nests
//! them by span containment. There is no parse stack: a close tag only
//! records where the most recent open fragment of the same name ends, and
//! [`tree::build`] derives structure from the resolved offsets afterwards.
//!
//! # Example
//!
//! ```
//! use dompa_scanner::{tree, Scanner};
//!
//! let flat = Scanner::scan("<p>Hi</p>").unwrap();
//! assert_eq!(flat.len(), 2);
//!
//! let nested = tree::build(flat);
//! assert_eq!(nested.len(), 1);
//! assert_eq!(nested[0].children.len(), 1);
//! ```

pub mod fragment;
pub mod scanner;
pub mod tree;

pub use fragment::{Fragment, FragmentKind, Span, VoidElements, VOID_ELEMENTS};
pub use scanner::Scanner;

/// Scanner error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// A close tag with no unclosed open tag of the same name before it.
    #[error("Could not find matching node for <{name}> (close tag at byte {offset})")]
    UnmatchedCloseTag { name: String, offset: usize },
}

/// Scan `source` and nest the resulting fragments in one step.
pub fn fragment_tree(
    source: &str,
    void_elements: &VoidElements,
) -> Result<Vec<Fragment>, ScanError> {
    let flat = Scanner::new(source)
        .with_void_elements(void_elements)
        .scan_fragments()?;
    Ok(tree::build(flat))
}
