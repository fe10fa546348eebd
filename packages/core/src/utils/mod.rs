//! Utility functions for PageSpace Core
//!
//! This module provides common utility functions used across the codebase.

mod json_extract;

pub use json_extract::{extract_json, ExtractError};
