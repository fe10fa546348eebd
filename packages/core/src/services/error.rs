//! Service Layer Error Types
//!
//! Error taxonomy for the design analysis pipeline. All of these are
//! caught at the top of the pipeline, stringified into the analyzer's
//! last-error slot, and surfaced to callers as an absence value; nothing
//! escapes as a panic or an unhandled error.

use pagespace_vision_engine::VisionError;
use thiserror::Error;

use crate::models::NormalizeError;
use crate::utils::ExtractError;

/// Errors that can occur during design analysis
///
/// Covers the full taxonomy: configuration (no API key), transport/HTTP
/// and content errors (via [`VisionError`]), parse errors (no JSON in the
/// reply), and shape errors (JSON that is not a component array).
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No API key configured; checked before any network traffic
    #[error("No API key configured. Set it in the API settings first.")]
    MissingApiKey,

    /// Vision endpoint failure (transport, HTTP status, or empty content)
    #[error(transparent)]
    Vision(#[from] VisionError),

    /// None of the JSON extraction strategies succeeded
    #[error(transparent)]
    Parse(#[from] ExtractError),

    /// Extracted JSON does not have the component-array shape
    #[error(transparent)]
    Shape(#[from] NormalizeError),
}
