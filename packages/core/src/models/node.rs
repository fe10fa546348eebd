//! Component Node Data Structures
//!
//! This module defines the core `Node` struct and `NodeType` enum for
//! PageSpace's component tree.
//!
//! # Architecture
//!
//! - **Universal Node**: Single struct represents all canvas element types
//! - **Pure JSON Props**: All element-specific data in the `props` field,
//!   with Tailwind class fragments grouped under `props.tw`
//! - **System-Assigned Ids**: Node ids are uuid v4 strings generated by
//!   constructors; external input never supplies them
//!
//! # Examples
//!
//! ```rust
//! use pagespace_core::models::{Node, NodeType};
//! use serde_json::json;
//!
//! // A text node
//! let text = Node::text("Welcome to PageSpace");
//!
//! // A container with styled children
//! let hero = Node::with_children(
//!     NodeType::Container,
//!     json!({ "tw": { "flex": "flex flex-col items-center", "padding": "py-16" } }),
//!     vec![text, Node::button("Get Started")],
//! );
//! assert_eq!(hero.children.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for Node structures
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Properties validation failed: {0}")]
    InvalidProperties(String),

    #[error("Node of type '{0}' must have non-empty text")]
    MissingText(String),

    #[error("Node of type '{0}' cannot have children")]
    UnexpectedChildren(String),
}

/// Closed set of canvas element types
///
/// Unknown type strings deserialize as `Container`, so a tree coming from
/// an external source can never carry a type outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum NodeType {
    #[default]
    Container,
    Text,
    Button,
    Image,
    Divider,
    Icon,
    Video,
    Input,
    Textarea,
    Label,
}

impl NodeType {
    /// The lowercase wire name of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Container => "container",
            NodeType::Text => "text",
            NodeType::Button => "button",
            NodeType::Image => "image",
            NodeType::Divider => "divider",
            NodeType::Icon => "icon",
            NodeType::Video => "video",
            NodeType::Input => "input",
            NodeType::Textarea => "textarea",
            NodeType::Label => "label",
        }
    }

    /// Parse a type string, coercing anything unrecognized to `Container`
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "container" => NodeType::Container,
            "text" => NodeType::Text,
            "button" => NodeType::Button,
            "image" => NodeType::Image,
            "divider" => NodeType::Divider,
            "icon" => NodeType::Icon,
            "video" => NodeType::Video,
            "input" => NodeType::Input,
            "textarea" => NodeType::Textarea,
            "label" => NodeType::Label,
            _ => NodeType::Container,
        }
    }

    /// Whether nodes of this type carry a `props.text` string
    pub fn is_text_bearing(&self) -> bool {
        matches!(self, NodeType::Text | NodeType::Button | NodeType::Label)
    }

    /// Placeholder text used when a text-bearing node arrives without text
    pub fn placeholder_text(&self) -> &'static str {
        match self {
            NodeType::Button => "Button",
            _ => "Text",
        }
    }
}

impl From<String> for NodeType {
    fn from(value: String) -> Self {
        NodeType::parse_lenient(&value)
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element in the canvas component tree.
///
/// # Fields
///
/// - `id`: Unique identifier (uuid v4 string), assigned by the system
/// - `node_type`: Element type, serialized as `type`
/// - `props`: JSON object with element-specific data; always contains a
///   `tw` object mapping semantic style keys (padding, bg, color, ...) to
///   Tailwind class fragments. Text-bearing types carry `text`, images
///   carry `src`, videos carry `videoId`
/// - `children`: Child nodes; only meaningful for containers, always empty
///   for every other type
///
/// # Examples
///
/// ```rust
/// # use pagespace_core::models::{Node, NodeType};
/// # use serde_json::json;
/// let button = Node::new(
///     NodeType::Button,
///     json!({ "text": "Sign up", "tw": { "bg": "bg-blue-600", "rounded": "rounded-lg" } }),
/// );
/// assert_eq!(button.text_content(), Some("Sign up"));
/// assert!(button.children.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier (uuid v4 string)
    pub id: String,

    /// Element type
    #[serde(rename = "type", default)]
    pub node_type: NodeType,

    /// Element-specific data (Pure JSON props)
    #[serde(default = "empty_object")]
    pub props: serde_json::Value,

    /// Child nodes (containers only)
    #[serde(default)]
    pub children: Vec<Node>,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Node {
    /// Create a new Node with an auto-generated uuid and no children
    pub fn new(node_type: NodeType, props: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            node_type,
            props,
            children: Vec::new(),
        }
    }

    /// Create a new Node with children
    pub fn with_children(
        node_type: NodeType,
        props: serde_json::Value,
        children: Vec<Node>,
    ) -> Self {
        Self {
            children,
            ..Self::new(node_type, props)
        }
    }

    /// Create a container with children and an empty `tw` object
    pub fn container(children: Vec<Node>) -> Self {
        Self::with_children(
            NodeType::Container,
            serde_json::json!({ "tw": {} }),
            children,
        )
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(
            NodeType::Text,
            serde_json::json!({ "text": content.into(), "tw": {} }),
        )
    }

    /// Create a button node
    pub fn button(label: impl Into<String>) -> Self {
        Self::new(
            NodeType::Button,
            serde_json::json!({ "text": label.into(), "tw": {} }),
        )
    }

    /// Create an image node
    pub fn image(src: impl Into<String>) -> Self {
        Self::new(
            NodeType::Image,
            serde_json::json!({ "src": src.into(), "tw": {} }),
        )
    }

    /// Create a divider node
    pub fn divider() -> Self {
        Self::new(NodeType::Divider, serde_json::json!({ "tw": {} }))
    }

    /// Create a video node pointing at a video identifier
    pub fn video(video_id: impl Into<String>) -> Self {
        Self::new(
            NodeType::Video,
            serde_json::json!({ "videoId": video_id.into(), "tw": {} }),
        )
    }

    /// Whether this node is a container
    pub fn is_container(&self) -> bool {
        self.node_type == NodeType::Container
    }

    /// The node's `props.text` string, if present
    pub fn text_content(&self) -> Option<&str> {
        self.props.get("text").and_then(|v| v.as_str())
    }

    /// The node's `props.tw` style object, if present
    pub fn tw(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.props.get("tw").and_then(|v| v.as_object())
    }

    /// Validate node structure and invariants
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - `id` is empty
    /// - `props` is not a JSON object or `props.tw` is missing/not an object
    /// - a text-bearing node has no (or an empty) `text`
    /// - a non-container node has children
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pagespace_core::models::Node;
    /// let node = Node::text("Valid content");
    /// assert!(node.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingField("id".to_string()));
        }

        if !self.props.is_object() {
            return Err(ValidationError::InvalidProperties(
                "props must be a JSON object".to_string(),
            ));
        }

        if self.tw().is_none() {
            return Err(ValidationError::InvalidProperties(
                "props.tw must be a JSON object".to_string(),
            ));
        }

        if self.node_type.is_text_bearing() && self.text_content().unwrap_or("").is_empty() {
            return Err(ValidationError::MissingText(
                self.node_type.as_str().to_string(),
            ));
        }

        if !self.is_container() && !self.children.is_empty() {
            return Err(ValidationError::UnexpectedChildren(
                self.node_type.as_str().to_string(),
            ));
        }

        for child in &self.children {
            child.validate()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = Node::text("a");
        let b = Node::text("b");
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }

    #[test]
    fn test_node_type_wire_names_round_trip() {
        for ty in [
            NodeType::Container,
            NodeType::Text,
            NodeType::Button,
            NodeType::Image,
            NodeType::Divider,
            NodeType::Icon,
            NodeType::Video,
            NodeType::Input,
            NodeType::Textarea,
            NodeType::Label,
        ] {
            assert_eq!(NodeType::parse_lenient(ty.as_str()), ty);
        }
    }

    #[test]
    fn test_unknown_type_deserializes_as_container() {
        let node: Node = serde_json::from_value(json!({
            "id": "n1",
            "type": "carousel",
            "props": { "tw": {} }
        }))
        .unwrap();
        assert_eq!(node.node_type, NodeType::Container);
    }

    #[test]
    fn test_missing_fields_default_on_deserialize() {
        let node: Node = serde_json::from_value(json!({ "id": "n1" })).unwrap();
        assert_eq!(node.node_type, NodeType::Container);
        assert!(node.props.is_object());
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_type_serializes_lowercase() {
        let value = serde_json::to_value(Node::button("Go")).unwrap();
        assert_eq!(value["type"], "button");
    }

    #[test]
    fn test_validate_rejects_missing_text() {
        let node = Node::new(NodeType::Label, json!({ "tw": {} }));
        assert!(matches!(
            node.validate(),
            Err(ValidationError::MissingText(_))
        ));
    }

    #[test]
    fn test_validate_rejects_children_on_leaf() {
        let mut node = Node::text("hi");
        node.children.push(Node::divider());
        assert!(matches!(
            node.validate(),
            Err(ValidationError::UnexpectedChildren(_))
        ));
    }

    #[test]
    fn test_validate_recurses_into_children() {
        let bad_child = Node::new(NodeType::Text, json!({ "tw": {} }));
        let tree = Node::container(vec![bad_child]);
        assert!(tree.validate().is_err());
    }
}
