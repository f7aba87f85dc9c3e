//! Nesting of scanned fragments by span containment.
//!
//! Fragments are visited in discovery order. Each unclaimed fragment claims
//! every fragment its span strictly contains, recursively; a fragment claimed
//! once cannot be attached anywhere else. Recovery from malformed markup
//! falls out of this directly:
//!
//! - an unclosed fragment (`end == 0`) contains nothing, so whatever followed
//!   it lexically becomes its siblings;
//! - a close tag that lands after a sibling's close pushes the end offset
//!   out, so that sibling fails containment and is flattened;
//! - when two fragments both contain a third, the one discovered first wins.
//!
//! Candidate search is a linear scan per fragment, O(n²) in the worst case.

use std::collections::HashSet;

use tracing::debug;

use crate::fragment::{Fragment, Span};

/// Turn a flat, resolved fragment list into a tree.
pub fn build(flat: Vec<Fragment>) -> Vec<Fragment> {
    let all: Vec<usize> = (0..flat.len()).collect();
    let mut claimed = HashSet::new();
    join(&flat, &all, &mut claimed)
}

fn join(flat: &[Fragment], candidates: &[usize], claimed: &mut HashSet<Span>) -> Vec<Fragment> {
    let mut joined = Vec::new();

    for &index in candidates {
        let fragment = &flat[index];
        if !claimed.insert(fragment.span) {
            continue;
        }

        if fragment.is_open() {
            debug!(
                name = fragment.name().unwrap_or_default(),
                start = fragment.span.start,
                "fragment was never closed and stays empty"
            );
        }

        let children = if fragment.is_text() {
            Vec::new()
        } else {
            let inner: Vec<usize> = candidates
                .iter()
                .copied()
                .filter(|&i| fragment.span.contains(&flat[i].span))
                .collect();
            join(flat, &inner, claimed)
        };

        joined.push(Fragment {
            kind: fragment.kind.clone(),
            span: fragment.span,
            children,
        });
    }

    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scanner;
    use pretty_assertions::assert_eq;

    /// Helper: render a fragment tree as `name(children)` for compact asserts.
    fn shape(fragments: &[Fragment]) -> String {
        fragments
            .iter()
            .map(|f| {
                let name = f.name().unwrap_or("#text");
                if f.children.is_empty() {
                    name.to_string()
                } else {
                    format!("{name}({})", shape(&f.children))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn tree(source: &str) -> String {
        shape(&build(Scanner::scan(source).unwrap()))
    }

    #[test]
    fn test_empty() {
        assert!(build(Vec::new()).is_empty());
    }

    #[test]
    fn test_nested() {
        assert_eq!(
            tree("<div><p>Paragraph</p><span>Span</span></div>"),
            "div(p(#text) span(#text))"
        );
    }

    #[test]
    fn test_deep_nesting() {
        assert_eq!(
            tree("<div>a<span>b<span>c</span></span></div>"),
            "div(#text span(#text span(#text)))"
        );
    }

    #[test]
    fn test_siblings_at_top_level() {
        assert_eq!(tree("<div>First</div><p>Second</p>"), "div(#text) p(#text)");
    }

    #[test]
    fn test_unclosed_fragment_has_no_children() {
        assert_eq!(tree("<div><p>Hello</p>"), "div p(#text)");
    }

    #[test]
    fn test_unclosed_child_claimed_before_text() {
        // p is discovered before the text, so it is claimed first, but
        // being unclosed it cannot hold the text
        assert_eq!(tree("<div><p>Hello</div>"), "div(p #text)");
    }

    #[test]
    fn test_crossed_tags_flatten() {
        assert_eq!(tree("<div><p>Hello</div></p>"), "div(#text) p");
    }

    #[test]
    fn test_void_fragments_are_leaves() {
        assert_eq!(tree("<div><br><img></div>"), "div(br img)");
    }

    #[test]
    fn test_text_is_leaf() {
        let frags = build(vec![
            Fragment::text(Span::new(0, 10)),
            Fragment::tag("b", Span::new(2, 5)),
        ]);
        assert_eq!(shape(&frags), "#text b");
    }

    #[test]
    fn test_first_discovered_claims_shared_descendant() {
        // Hand-built spans where two siblings both contain the third
        let frags = build(vec![
            Fragment::tag("a", Span::new(0, 20)),
            Fragment::tag("b", Span::new(1, 30)),
            Fragment::tag("c", Span::new(5, 10)),
        ]);
        assert_eq!(shape(&frags), "a(c) b");
    }

    #[test]
    fn test_spans_survive_build() {
        let frags = build(Scanner::scan("<p>x</p>").unwrap());
        assert_eq!(frags[0].span, Span::new(0, 8));
        assert_eq!(frags[0].children[0].span, Span::new(3, 4));
    }
}
