//! Model-Output Normalization
//!
//! Vision models return component trees as loosely structured JSON: types
//! may be misspelled, `props` or `tw` may be missing, text may be empty,
//! and leaf nodes may carry children. This module walks the parsed JSON
//! and repairs every element into a valid [`Node`], assigning fresh ids so
//! that identifiers from external input are never trusted.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{Node, NodeType};

/// Errors produced while normalizing parsed model output
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Analysis result has the wrong shape: expected a JSON array")]
    NotAnArray,
}

/// Normalize parsed model output into a validated node sequence.
///
/// Applied recursively to every element and every container's children:
///
/// - invalid or missing `type` is coerced to `container`
/// - `props` and `props.tw` are defaulted to empty objects
/// - text-bearing types get placeholder text when `text` is absent or empty
/// - `children` is forced to an array for containers and to empty for
///   every other type
/// - every node receives a fresh uuid; ids present in the input are
///   discarded
///
/// # Errors
///
/// Returns [`NormalizeError::NotAnArray`] when the top-level value is not
/// a JSON array.
///
/// # Examples
///
/// ```rust
/// # use pagespace_core::models::normalize_nodes;
/// # use serde_json::json;
/// let nodes = normalize_nodes(json!([{ "type": "button" }])).unwrap();
/// assert_eq!(nodes[0].text_content(), Some("Button"));
/// assert!(nodes[0].children.is_empty());
/// ```
pub fn normalize_nodes(value: Value) -> Result<Vec<Node>, NormalizeError> {
    let Value::Array(elements) = value else {
        return Err(NormalizeError::NotAnArray);
    };

    Ok(elements.into_iter().map(fix_node).collect())
}

/// Repair one raw element into a valid Node, recursing into children
fn fix_node(value: Value) -> Node {
    let mut raw = match value {
        Value::Object(map) => map,
        // Anything that is not an object becomes an empty container
        _ => Map::new(),
    };

    let node_type = raw
        .get("type")
        .and_then(Value::as_str)
        .map(NodeType::parse_lenient)
        .unwrap_or(NodeType::Container);

    let mut props = match raw.remove("props") {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };

    if !props.get("tw").map(Value::is_object).unwrap_or(false) {
        props.insert("tw".to_string(), Value::Object(Map::new()));
    }

    if node_type.is_text_bearing() {
        let has_text = props
            .get("text")
            .and_then(Value::as_str)
            .map(|t| !t.is_empty())
            .unwrap_or(false);
        if !has_text {
            props.insert(
                "text".to_string(),
                Value::String(node_type.placeholder_text().to_string()),
            );
        }
    }

    let children = if node_type == NodeType::Container {
        match raw.remove("children") {
            Some(Value::Array(raw_children)) => {
                raw_children.into_iter().map(fix_node).collect()
            }
            _ => Vec::new(),
        }
    } else {
        Vec::new()
    };

    // Node::new generates the uuid, so input ids never survive
    Node::with_children(node_type, Value::Object(props), children)
}
