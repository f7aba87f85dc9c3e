//! Structured serializer.
//!
//! Every node becomes an object with a `type` of `element`, `text`, `void`
//! or `fragment`. The layout matches the `serde` representation of
//! [`Node`], so the output deserializes back into a tree.

use dompa_parser::{AttrValue, Attributes, Node};
use serde_json::{json, Map, Value};

/// Render `nodes` as a JSON array.
pub fn to_value(nodes: &[Node]) -> Value {
    Value::Array(nodes.iter().map(node_value).collect())
}

fn node_value(node: &Node) -> Value {
    match node {
        Node::Element(el) => json!({
            "type": "element",
            "name": el.name,
            "attributes": attributes_value(&el.attributes),
            "children": to_value(&el.children),
        }),
        Node::Text(text) => json!({
            "type": "text",
            "value": text.value,
        }),
        Node::Void(void) => json!({
            "type": "void",
            "name": void.name,
            "attributes": attributes_value(&void.attributes),
        }),
        Node::Fragment(fragment) => json!({
            "type": "fragment",
            "children": to_value(&fragment.children),
        }),
    }
}

fn attributes_value(attributes: &Attributes) -> Value {
    let map: Map<String, Value> = attributes
        .iter()
        .map(|(key, value)| {
            let value = match value {
                AttrValue::String(s) => Value::String(s.clone()),
                AttrValue::True => Value::Bool(true),
            };
            (key.clone(), value)
        })
        .collect();
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty() {
        assert_eq!(to_value(&[]), json!([]));
    }

    #[test]
    fn test_each_variant_is_tagged() {
        let nodes = vec![
            Node::text("a"),
            Node::simple_void("br"),
            Node::simple_element("p", vec![]),
            Node::fragment(vec![]),
        ];
        let types: Vec<_> = to_value(&nodes)
            .as_array()
            .into_iter()
            .flatten()
            .map(|v| v["type"].as_str().unwrap_or_default().to_string())
            .collect();
        assert_eq!(types, vec!["text", "void", "element", "fragment"]);
    }

    #[test]
    fn test_attributes() {
        let mut attrs = Attributes::new();
        attrs.insert("required".into(), AttrValue::True);
        attrs.insert("name".into(), AttrValue::string("q"));

        assert_eq!(
            to_value(&[Node::void("input", attrs)]),
            json!([{
                "type": "void",
                "name": "input",
                "attributes": { "required": true, "name": "q" }
            }])
        );
    }

    #[test]
    fn test_nested() {
        let nodes = vec![Node::fragment(vec![Node::simple_element(
            "h1",
            vec![Node::text("Title")],
        )])];
        assert_eq!(
            to_value(&nodes),
            json!([{
                "type": "fragment",
                "children": [{
                    "type": "element",
                    "name": "h1",
                    "attributes": {},
                    "children": [{ "type": "text", "value": "Title" }]
                }]
            }])
        );
    }

    #[test]
    fn test_matches_serde_layout() {
        let mut attrs = Attributes::new();
        attrs.insert("id".into(), AttrValue::string("x"));
        let nodes = vec![
            Node::element("div", attrs, vec![Node::text("t"), Node::simple_void("hr")]),
            Node::fragment(vec![Node::text("f")]),
        ];

        let value = to_value(&nodes);
        assert_eq!(serde_json::to_value(&nodes).unwrap(), value);

        let back: Vec<Node> = serde_json::from_value(value).unwrap();
        assert_eq!(back, nodes);
    }
}
