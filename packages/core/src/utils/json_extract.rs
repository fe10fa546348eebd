//! JSON extraction from free-form model output
//!
//! Vision models are asked to reply with a bare JSON array, but replies
//! routinely arrive wrapped in prose or markdown fences. Extraction is an
//! ordered list of independent fallible strategies, tried in sequence;
//! the first one that yields parseable JSON wins:
//!
//! 1. the entire text parses as JSON
//! 2. the interior of the first fenced code block parses as JSON
//! 3. the substring from the first `[` to the last `]` parses as JSON

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use thiserror::Error;

/// First fenced code block, optionally tagged `json`
static CODE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?\s*\n?(.*?)\n?```").unwrap());

/// No extraction strategy produced parseable JSON
#[derive(Error, Debug)]
#[error("No valid JSON found in model output")]
pub struct ExtractError;

/// Extract a JSON value from free-form model output.
///
/// Returns the first successfully parsed value; the caller decides whether
/// its shape is acceptable (the normalizer rejects non-arrays).
///
/// # Errors
///
/// Returns [`ExtractError`] when every strategy fails.
///
/// # Examples
///
/// ```rust
/// # use pagespace_core::utils::extract_json;
/// let reply = "Here you go:\n```json\n[{\"type\":\"button\"}]\n```";
/// let value = extract_json(reply).unwrap();
/// assert!(value.is_array());
/// ```
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    // 1. The whole reply is JSON
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    // 2. A fenced code block contains JSON
    if let Some(captures) = CODE_BLOCK_RE.captures(text) {
        if let Ok(value) = serde_json::from_str::<Value>(&captures[1]) {
            return Ok(value);
        }
    }

    // 3. Slice from the first '[' to the last ']'
    if let (Some(start), Some(end)) = (text.find('['), text.rfind(']')) {
        if end > start {
            if let Ok(value) = serde_json::from_str::<Value>(&text[start..=end]) {
                return Ok(value);
            }
        }
    }

    Err(ExtractError)
}
