/// PageSpace Vision Engine - Design Screenshot Analysis Service
///
/// This crate provides the HTTP client layer for converting web design
/// screenshots into PageSpace component trees using hosted vision-capable
/// language models (OpenAI-compatible chat/completions endpoints).
///
/// # Features
///
/// - **OpenAI-Compatible**: Works against any `/chat/completions` endpoint
///   that accepts image parts (OpenAI, Azure, local gateways)
/// - **Schema-Pinned Prompts**: Fixed system prompt describing the exact
///   component-tree JSON the editor consumes
/// - **Data-URL Uploads**: Screenshots are embedded as base64 data URLs
///   with a high-detail hint, no file hosting required
/// - **Single-Shot Requests**: One request per analysis, no streaming or
///   retry machinery
///
/// # Example
///
/// ```ignore
/// use pagespace_vision_engine::{VisionClient, VisionConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut config = VisionConfig::default();
///     config.api_key = "sk-...".to_string();
///
///     let client = VisionClient::new(config)?;
///     let image = std::fs::read("design.png")?;
///     let data_url = pagespace_vision_engine::image_data_url(&image, "image/png");
///
///     // Raw model reply; the editor's normalizer turns it into components
///     let reply = client.describe_design(&data_url).await?;
///     println!("{}", reply);
///
///     Ok(())
/// }
/// ```
pub mod config;
pub mod error;
pub mod prompts;
pub mod vision;

// Re-export main types
pub use config::VisionConfig;
pub use error::{Result, VisionError};
pub use vision::{image_data_url, VisionClient};
