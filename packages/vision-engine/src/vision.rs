//! Vision model client
//!
//! Sends a design screenshot (as a base64 data URL) plus the fixed analysis
//! prompts to an OpenAI-compatible `/chat/completions` endpoint and returns
//! the model's raw text reply. Turning that reply into component nodes is
//! the editor's job; this layer only owns the HTTP contract.

use std::time::Duration;

use base64::Engine;
use serde::Deserialize;
use tracing::debug;

use crate::config::VisionConfig;
use crate::error::{Result, VisionError};
use crate::prompts::{SYSTEM_PROMPT, USER_PROMPT};

/// Build a base64 data URL for a screenshot
///
/// # Arguments
///
/// * `bytes` - Raw image bytes
/// * `mime` - MIME type of the image (e.g. "image/png")
pub fn image_data_url(bytes: &[u8], mime: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, encoded)
}

/// Client for vision-capable chat completion endpoints
#[derive(Debug)]
pub struct VisionClient {
    client: reqwest::Client,
    config: VisionConfig,
}

/// Response shape of an OpenAI-compatible chat completion
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Error body returned by OpenAI-compatible endpoints
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl VisionClient {
    /// Create a new client from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `VisionError::MissingApiKey` when no key is configured and
    /// `VisionError::ConfigError` for any other invalid setting.
    pub fn new(config: VisionConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(VisionError::MissingApiKey);
        }
        config.validate().map_err(VisionError::ConfigError)?;

        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    /// Analyze a design screenshot and return the model's raw reply text
    ///
    /// The screenshot is embedded as an `image_url` part with a high-detail
    /// hint. One request per call; there is no retry or streaming.
    ///
    /// # Arguments
    ///
    /// * `image_data_url` - Screenshot as a `data:<mime>;base64,...` URL
    ///
    /// # Errors
    ///
    /// - `VisionError::RequestError` for transport failures
    /// - `VisionError::ApiError` for non-success HTTP statuses, carrying the
    ///   server's `error.message` when one is present
    /// - `VisionError::EmptyResponse` when the reply has no content
    pub async fn describe_design(&self, image_data_url: &str) -> Result<String> {
        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "system",
                    "content": SYSTEM_PROMPT,
                },
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "text",
                            "text": USER_PROMPT,
                        },
                        {
                            "type": "image_url",
                            "image_url": {
                                "url": image_data_url,
                                "detail": "high",
                            },
                        },
                    ],
                },
            ],
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        });

        let url = format!("{}/chat/completions", self.config.normalized_base_url());
        debug!(model = %self.config.model, %url, "sending design analysis request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            // Prefer the server's own error message when the body parses
            let message = serde_json::from_str::<ApiErrorResponse>(&error_text)
                .ok()
                .and_then(|e| e.error)
                .map(|e| e.message)
                .unwrap_or_else(|| {
                    format!(
                        "API request failed ({}: {})",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or("unknown")
                    )
                });

            return Err(VisionError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        let content = completion
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .filter(|c| !c.is_empty())
            .ok_or(VisionError::EmptyResponse)?;

        debug!(reply_len = content.len(), "received design analysis reply");

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VisionConfig;

    fn test_config() -> VisionConfig {
        VisionConfig {
            api_key: "sk-test".to_string(),
            ..VisionConfig::default()
        }
    }

    #[test]
    fn test_image_data_url_format() {
        let url = image_data_url(b"abc", "image/png");
        assert_eq!(url, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_new_requires_api_key() {
        let err = VisionClient::new(VisionConfig::default()).unwrap_err();
        assert!(matches!(err, VisionError::MissingApiKey));

        assert!(VisionClient::new(test_config()).is_ok());
    }

    #[test]
    fn test_response_deserialization() {
        let raw = r#"{
            "id": "chatcmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "[]" }, "finish_reason": "stop" }
            ]
        }"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("[]"));
    }

    #[test]
    fn test_error_body_deserialization() {
        let raw = r#"{ "error": { "message": "invalid api key", "type": "auth" } }"#;
        let parsed: ApiErrorResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.error.unwrap().message, "invalid api key");
    }
}
