//! Tree rewriting and searching.

use crate::node::Node;

/// Rewrite a tree, depth-first, parents before children.
///
/// `visit` receives each node by value and returns:
///
/// - the node itself, modified or not, to keep it
/// - a different node to replace it
/// - a [`Node::fragment`] whose children are spliced in its place
/// - `None` to remove it
///
/// Children of returned elements are visited next; text and void nodes
/// have nothing further to visit. The input tree is left untouched: each
/// top-level node is copied as the walk reaches it and its descendants are
/// moved from that copy, never copied again.
///
/// ```
/// use dompa_parser::{traverse, Node};
///
/// let tree = vec![Node::simple_element("div", vec![Node::simple_element("h1", vec![])])];
/// let out = traverse(&tree, |node| match node.name() {
///     Some("h1") => None,
///     _ => Some(node),
/// });
/// assert_eq!(out, vec![Node::simple_element("div", vec![])]);
/// assert_eq!(tree[0].children().len(), 1);
/// ```
pub fn traverse<F>(nodes: &[Node], mut visit: F) -> Vec<Node>
where
    F: FnMut(Node) -> Option<Node>,
{
    traverse_nodes(nodes.iter().cloned(), &mut visit)
}

/// Like [`traverse`], but consumes the tree instead of copying it.
pub fn traverse_owned<F>(nodes: Vec<Node>, mut visit: F) -> Vec<Node>
where
    F: FnMut(Node) -> Option<Node>,
{
    traverse_nodes(nodes, &mut visit)
}

fn traverse_nodes<I, F>(nodes: I, visit: &mut F) -> Vec<Node>
where
    I: IntoIterator<Item = Node>,
    F: FnMut(Node) -> Option<Node>,
{
    let mut result = Vec::new();

    for node in nodes {
        let Some(updated) = visit(node) else {
            continue;
        };

        match updated {
            Node::Text(_) | Node::Void(_) => result.push(updated),
            Node::Fragment(fragment) => result.extend(traverse_nodes(fragment.children, visit)),
            Node::Element(mut element) => {
                let children = std::mem::take(&mut element.children);
                element.children = traverse_nodes(children, visit);
                result.push(Node::Element(element));
            }
        }
    }

    result
}

/// Collect every node matching `predicate`, depth-first in document order.
///
/// Matching does not stop the descent: descendants of a match are searched
/// too, and fragment children are searched like any other children.
pub fn find<'a, P>(nodes: &'a [Node], mut predicate: P) -> Vec<&'a Node>
where
    P: FnMut(&Node) -> bool,
{
    let mut found = Vec::new();
    collect(nodes, &mut predicate, &mut found);
    found
}

fn collect<'a, P>(nodes: &'a [Node], predicate: &mut P, found: &mut Vec<&'a Node>)
where
    P: FnMut(&Node) -> bool,
{
    for node in nodes {
        if predicate(node) {
            found.push(node);
        }
        collect(node.children(), predicate, found);
    }
}
