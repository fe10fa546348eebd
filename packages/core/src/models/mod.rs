//! Data Models
//!
//! This module contains the core data structures of the PageSpace canvas:
//!
//! - `Node` / `NodeType` - the universal component tree element
//! - `normalize_nodes` - repair of loosely structured model output into
//!   valid nodes
//!
//! All element-specific data lives in the Pure JSON `props` field; style
//! fragments are grouped under `props.tw`.

mod node;
mod normalize;

pub use node::{Node, NodeType, ValidationError};
pub use normalize::{normalize_nodes, NormalizeError};
