//! Markup serializer.
//!
//! Text is written verbatim and fragments contribute only their children.
//! String attributes are always double-quoted; `true` attributes are written
//! bare. Void nodes get no closing tag.

use dompa_parser::{AttrValue, Attributes, Node};

/// Render `nodes` as markup.
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_nodes(nodes, &mut out);
    out
}

fn write_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        write_node(node, out);
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&text.value),
        Node::Fragment(fragment) => write_nodes(&fragment.children, out),
        Node::Void(void) => write_open_tag(&void.name, &void.attributes, out),
        Node::Element(el) => {
            write_open_tag(&el.name, &el.attributes, out);
            write_nodes(&el.children, out);
            out.push_str(&format!("</{}>", el.name));
        }
    }
}

fn write_open_tag(name: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(name);

    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        if let AttrValue::String(value) = value {
            out.push_str(&format!("=\"{value}\""));
        }
    }

    out.push('>');
}
