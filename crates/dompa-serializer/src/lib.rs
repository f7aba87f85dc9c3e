//! dompa Serializer
//!
//! Renders node trees. Two serializers are provided:
//!
//! ```text
//! Vec<Node> → serialize(nodes, Html) → markup String
//! Vec<Node> → serialize(nodes, Json) → serde_json::Value
//! ```
//!
//! Any `Fn(&[Node]) -> T` is a serializer as well.
//!
//! # Example
//!
//! ```
//! use dompa_parser::parse;
//! use dompa_serializer::{serialize, Html};
//!
//! let nodes = parse("<p class=\"lead\">Hi</p>").unwrap();
//! assert_eq!(serialize(&nodes, Html), "<p class=\"lead\">Hi</p>");
//! ```

pub mod html;
pub mod json;

use dompa_parser::Node;

/// Serialization error.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Something that renders a node tree into an output value.
pub trait Serializer {
    type Output;

    fn serialize(&self, nodes: &[Node]) -> Self::Output;
}

impl<F, T> Serializer for F
where
    F: Fn(&[Node]) -> T,
{
    type Output = T;

    fn serialize(&self, nodes: &[Node]) -> T {
        self(nodes)
    }
}

/// Markup serializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html;

impl Serializer for Html {
    type Output = String;

    fn serialize(&self, nodes: &[Node]) -> String {
        html::to_html(nodes)
    }
}

/// Structured serializer producing a JSON value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Serializer for Json {
    type Output = serde_json::Value;

    fn serialize(&self, nodes: &[Node]) -> serde_json::Value {
        json::to_value(nodes)
    }
}

/// Serialize `nodes` with `serializer`.
pub fn serialize<S>(nodes: &[Node], serializer: S) -> S::Output
where
    S: Serializer,
{
    serializer.serialize(nodes)
}

/// Serialize `nodes` to JSON text, compact or indented.
pub fn to_json_string(nodes: &[Node], pretty: bool) -> Result<String, SerializeError> {
    let value = json::to_value(nodes);
    let text = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}
