//! PageSpace Core Editor Layer
//!
//! This crate provides the document model, editing operations, and export
//! logic for the PageSpace visual page builder.
//!
//! # Architecture
//!
//! - **Universal Component Node**: Single struct represents every canvas
//!   element; styling lives in a Pure JSON `props.tw` object
//! - **Owned Editor State**: One `EditorState` object holds the document,
//!   selection, and UI flags; every mutation site goes through it
//! - **Slot Persistence**: The whole document and the API settings are
//!   stored as strings under fixed named slots
//! - **Vision Pipeline**: Design screenshots are analyzed by the sibling
//!   vision-engine package and normalized into the same node tree
//!
//! # Modules
//!
//! - [`models`] - Data structures (Node, NodeType) and response normalization
//! - [`operations`] - Recursive tree operations (find, delete, duplicate)
//! - [`services`] - Editor state, HTML export, analysis pipeline, toasts
//! - [`storage`] - Slot-backed persistence for documents and settings
//! - [`utils`] - JSON extraction from free-form model output

pub mod models;
pub mod operations;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use models::*;
pub use operations::*;
pub use services::*;
