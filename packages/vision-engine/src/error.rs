/// Error types for the vision analysis engine
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API request failed ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Model returned no usable content")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, VisionError>;
