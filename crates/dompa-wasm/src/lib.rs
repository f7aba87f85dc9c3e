//! WASM bindings for dompa.
//!
//! Exposes parsing plus serialization to JavaScript via wasm-bindgen.
//! Parse errors are thrown as JS `Error`s carrying a `tagName` property.

use dompa_parser::{Node, ParseError};
use dompa_serializer::{serialize, Html, Json};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn parse(source: &str) -> Result<Vec<Node>, JsValue> {
    dompa_parser::parse(source).map_err(|e| parse_error(&e))
}

/// Convert a parse error into a JS `Error` with the unmatched tag name
/// attached as `tagName`.
fn parse_error(err: &ParseError) -> JsValue {
    let error = js_sys::Error::new(&err.to_string());
    // Only fails for non-extensible targets; a fresh Error is extensible
    let _ = js_sys::Reflect::set(&error, &"tagName".into(), &err.tag_name().into());
    error.into()
}

/// Parse markup and serialize it back to markup.
#[wasm_bindgen(js_name = toHtml)]
pub fn to_html(source: &str) -> Result<String, JsValue> {
    let nodes = parse(source)?;
    Ok(serialize(&nodes, Html))
}

/// Parse markup and return the node tree as a plain JS array of
/// `{ type, ... }` objects.
#[wasm_bindgen(js_name = toJson)]
pub fn to_json(source: &str) -> Result<JsValue, JsValue> {
    let nodes = parse(source)?;
    let value = serialize(&nodes, Json);

    // Plain objects rather than `Map`s, so `JSON.stringify` works on the result
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
