/// Configuration for the vision analysis service
use serde::{Deserialize, Serialize};

/// Default OpenAI-compatible endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";

/// Default vision-capable model
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Token cap for a single analysis reply. Component trees for dense
/// designs run long, so this sits well above typical chat defaults.
const DEFAULT_MAX_TOKENS: u32 = 16_000;

/// Low temperature keeps the model close to the requested JSON schema
const DEFAULT_TEMPERATURE: f64 = 0.1;

/// Configuration for the vision model endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    /// Bearer token for the API endpoint
    pub api_key: String,

    /// Base URL of the OpenAI-compatible API (without `/chat/completions`)
    pub api_base_url: String,

    /// Model name to request
    pub model: String,

    /// Maximum tokens the model may spend on the reply
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f64,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: 120,
        }
    }
}

impl VisionConfig {
    /// Base URL with any trailing slashes removed, ready for path joining
    pub fn normalized_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("api_key cannot be empty".to_string());
        }

        if self.api_base_url.is_empty() {
            return Err("api_base_url cannot be empty".to_string());
        }

        if self.model.is_empty() {
            return Err("model cannot be empty".to_string());
        }

        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be between 0.0 and 2.0".to_string());
        }

        Ok(())
    }
}
