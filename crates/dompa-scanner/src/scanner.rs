use std::borrow::Cow;

use tracing::{debug, trace};

use crate::fragment::{Fragment, Span, VoidElements};
use crate::ScanError;

/// Positions of the tag and text run currently being collected.
///
/// Lives only for the duration of one scan.
#[derive(Debug, Default)]
struct Cursors {
    tag_start: Option<usize>,
    tag_end: Option<usize>,
    text_start: Option<usize>,
    text_end: Option<usize>,
}

impl Cursors {
    fn reset_tag(&mut self) {
        self.tag_start = None;
        self.tag_end = None;
    }

    fn reset_text(&mut self) {
        self.text_start = None;
        self.text_end = None;
    }
}

/// Markup scanner.
///
/// Makes a single left-to-right pass over the source and produces a flat,
/// discovery-ordered list of fragments. Open tags start out unclosed
/// (`end == 0`); each close tag resolves the most recent unclosed fragment
/// with the same name. Void tags are closed as soon as they are seen.
pub struct Scanner<'a> {
    source: &'a str,
    void_elements: Cow<'a, VoidElements>,
    fragments: Vec<Fragment>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner using the default void element set.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            void_elements: Cow::Owned(VoidElements::default()),
            fragments: Vec::new(),
        }
    }

    /// Use a custom set of void element names.
    pub fn with_void_elements(mut self, void_elements: &'a VoidElements) -> Self {
        self.void_elements = Cow::Borrowed(void_elements);
        self
    }

    /// Scan `source` with the default void element set.
    pub fn scan(source: &str) -> Result<Vec<Fragment>, ScanError> {
        Scanner::new(source).scan_fragments()
    }

    /// Run the scan, returning the flat fragment list with every close
    /// tag resolved.
    pub fn scan_fragments(mut self) -> Result<Vec<Fragment>, ScanError> {
        let mut cursors = Cursors::default();
        let len = self.source.len();

        for (i, ch) in self.source.char_indices() {
            let next = i + ch.len_utf8();
            let closes_tag = ch == '>' && cursors.tag_start.is_some();

            // Start of a tag, or end of a text run
            if ch == '<' {
                if cursors.text_start.is_some() {
                    cursors.text_end = Some(i);
                }
                cursors.tag_start = Some(i);
            }

            // Last char that does not finish a tag belongs to a text run
            if next == len && !closes_tag {
                cursors.text_end = Some(next);
            }

            if closes_tag {
                cursors.tag_end = Some(next);
            }

            if let (Some(start), Some(end)) = (cursors.tag_start, cursors.tag_end) {
                self.collect_tag(start, end)?;
                cursors.reset_tag();
                continue;
            }

            if cursors.tag_start.is_none() && cursors.text_start.is_none() {
                cursors.text_start = Some(i);
            }

            if let (Some(start), Some(end)) = (cursors.text_start, cursors.text_end) {
                trace!(start, end, "text fragment");
                self.fragments.push(Fragment::text(Span::new(start, end)));
                cursors.reset_text();
            }
        }

        Ok(self.fragments)
    }

    /// Handle a complete `<...>` between `start` and `end`.
    fn collect_tag(&mut self, start: usize, end: usize) -> Result<(), ScanError> {
        let tag = &self.source[start..end];

        if let Some(rest) = tag.strip_prefix("</") {
            let name = tag_name(&rest[..rest.len() - 1]);
            return self.close(name, start, end);
        }

        let name = tag_name(&tag[1..tag.len() - 1]);
        if name.is_empty() {
            debug!(start, "skipping tag without a name");
            return Ok(());
        }

        let span = if self.void_elements.contains(name) {
            Span::new(start, end)
        } else {
            Span::open(start)
        };

        trace!(name, start, closed = !span.is_open(), "tag fragment");
        self.fragments.push(Fragment::tag(name, span));
        Ok(())
    }

    /// Close the most recently opened, still unclosed fragment named `name`.
    ///
    /// Names are compared exactly, so `</DIV>` does not close `<div>`.
    fn close(&mut self, name: &str, start: usize, coord: usize) -> Result<(), ScanError> {
        let open = self
            .fragments
            .iter_mut()
            .rev()
            .find(|f| f.is_open() && f.name() == Some(name));

        match open {
            Some(fragment) => {
                fragment.span.end = coord;
                Ok(())
            }
            None => {
                debug!(name, start, "close tag without an open fragment");
                Err(ScanError::UnmatchedCloseTag {
                    name: name.to_string(),
                    offset: start,
                })
            }
        }
    }
}

/// The tag name inside `<` `>` (or `</` `>`): everything up to the first space.
fn tag_name(inner: &str) -> &str {
    inner.split(' ').next().unwrap_or_default().trim()
}
