//! Node model.
//!
//! A parsed document is a `Vec<Node>`. Every node is one of four variants:
//!
//! - [`ElementNode`]: a named tag with attributes and children
//! - [`TextNode`]: verbatim text between tags
//! - [`VoidNode`]: a self-closing tag, never with children
//! - [`FragmentNode`]: an anonymous container whose children take its place
//!   in the parent wherever it appears
//!
//! Nodes serialize with `serde`, tagged by a `type` field.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Attribute map, in the order attributes were first seen.
pub type Attributes = IndexMap<String, AttrValue>;

/// An attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// `<element attribute="value">`
    String(String),

    /// A valueless attribute: `<element checked>`
    True,
}

impl AttrValue {
    /// Shorthand for `AttrValue::String(value.into())`.
    pub fn string(value: impl Into<String>) -> Self {
        AttrValue::String(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(value) => Some(value),
            AttrValue::True => None,
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, AttrValue::True)
    }
}

impl Serialize for AttrValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AttrValue::String(value) => serializer.serialize_str(value),
            AttrValue::True => serializer.serialize_bool(true),
        }
    }
}

impl<'de> Deserialize<'de> for AttrValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AttrValueVisitor)
    }
}

struct AttrValueVisitor;

impl<'de> Visitor<'de> for AttrValueVisitor {
    type Value = AttrValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string or `true`")
    }

    fn visit_str<E>(self, value: &str) -> Result<AttrValue, E>
    where
        E: de::Error,
    {
        Ok(AttrValue::string(value))
    }

    fn visit_string<E>(self, value: String) -> Result<AttrValue, E>
    where
        E: de::Error,
    {
        Ok(AttrValue::String(value))
    }

    fn visit_bool<E>(self, value: bool) -> Result<AttrValue, E>
    where
        E: de::Error,
    {
        if value {
            Ok(AttrValue::True)
        } else {
            Err(E::invalid_value(de::Unexpected::Bool(false), &self))
        }
    }
}

/// A node in a parsed tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Element(ElementNode),
    Text(TextNode),
    Void(VoidNode),
    Fragment(FragmentNode),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    pub name: String,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoidNode {
    pub name: String,
    #[serde(default)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentNode {
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    /// Create an element:
    ///
    /// ```
    /// use dompa_parser::{Attributes, Node};
    ///
    /// let div = Node::element("div", Attributes::new(), vec![Node::text("Hi")]);
    /// assert_eq!(div.name(), Some("div"));
    /// ```
    pub fn element(name: impl Into<String>, attributes: Attributes, children: Vec<Node>) -> Self {
        Node::Element(ElementNode {
            name: name.into(),
            attributes,
            children,
        })
    }

    /// Create an element without attributes.
    pub fn simple_element(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::element(name, Attributes::new(), children)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(TextNode {
            value: value.into(),
        })
    }

    pub fn void(name: impl Into<String>, attributes: Attributes) -> Self {
        Node::Void(VoidNode {
            name: name.into(),
            attributes,
        })
    }

    /// Create a void node without attributes.
    pub fn simple_void(name: impl Into<String>) -> Self {
        Node::void(name, Attributes::new())
    }

    /// Create a fragment. When returned from a `traverse` visitor its
    /// children replace the visited node.
    pub fn fragment(children: Vec<Node>) -> Self {
        Node::Fragment(FragmentNode { children })
    }

    /// Tag name of an element or void node.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element(el) => Some(&el.name),
            Node::Void(void) => Some(&void.name),
            Node::Text(_) | Node::Fragment(_) => None,
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Node::Element(el) => Some(&el.attributes),
            Node::Void(void) => Some(&void.attributes),
            Node::Text(_) | Node::Fragment(_) => None,
        }
    }

    /// Children of an element or fragment; empty for text and void nodes.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(el) => &el.children,
            Node::Fragment(fragment) => &fragment.children,
            Node::Text(_) | Node::Void(_) => &[],
        }
    }

    /// The literal value of a text node.
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(&text.value),
            _ => None,
        }
    }

    /// The name, or `default` when there is none or it is blank.
    pub fn name_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.name() {
            Some(name) if !name.trim().is_empty() => name,
            _ => default,
        }
    }

    /// The attributes, or `default` when there are none.
    pub fn attributes_or<'a>(&'a self, default: &'a Attributes) -> &'a Attributes {
        match self.attributes() {
            Some(attributes) if !attributes.is_empty() => attributes,
            _ => default,
        }
    }

    /// The children, or `default` when there are none.
    pub fn children_or<'a>(&'a self, default: &'a [Node]) -> &'a [Node] {
        let children = self.children();
        if children.is_empty() {
            default
        } else {
            children
        }
    }

    /// The text value, or `default` when there is none or it is empty.
    pub fn value_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.value() {
            Some(value) if !value.is_empty() => value,
            _ => default,
        }
    }

    /// Look up a single attribute.
    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes().and_then(|attributes| attributes.get(key))
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Node::Void(_))
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self, Node::Fragment(_))
    }
}
