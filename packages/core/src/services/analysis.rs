//! Design Analysis Pipeline
//!
//! Wraps the vision engine into the editor-facing analysis flow: persist
//! settings, encode the screenshot, call the model, extract and normalize
//! the reply into component nodes.
//!
//! Error contract: every failure is caught here, stored as a
//! human-readable string in the last-error slot, and surfaced as `None`.
//! Callers check for absence; nothing in this pipeline throws past it.
//! There are no automatic retries; a failed analysis requires an explicit
//! user-triggered retry.
//!
//! Concurrency contract: `is_analyzing` is advisory for UIs (disable the
//! analyze button while set). Overlapping calls are not prevented; the
//! result slot is last-write-wins and no sequencing token ties a reply to
//! its originating request.

use pagespace_vision_engine::{image_data_url, VisionClient};
use tracing::{debug, warn};

use crate::models::{normalize_nodes, Node};
use crate::services::error::AnalysisError;
use crate::storage::{ApiSettings, SettingsStore};
use crate::utils::extract_json;

/// Design screenshot to component tree analyzer
pub struct DesignAnalyzer {
    settings_store: SettingsStore,
    settings: ApiSettings,
    is_analyzing: bool,
    result: Option<Vec<Node>>,
    last_error: Option<String>,
    progress: Option<String>,
}

impl DesignAnalyzer {
    /// Create an analyzer with default settings (no API key)
    pub fn new(settings_store: SettingsStore) -> Self {
        Self {
            settings_store,
            settings: ApiSettings::default(),
            is_analyzing: false,
            result: None,
            last_error: None,
            progress: None,
        }
    }

    /// Load persisted settings, replacing the in-memory ones
    pub async fn load_settings(&mut self) {
        self.settings = self.settings_store.load().await;
    }

    /// Current API settings
    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// Mutable access for settings UIs
    pub fn settings_mut(&mut self) -> &mut ApiSettings {
        &mut self.settings
    }

    /// Whether an analysis is currently in flight (advisory)
    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    /// The most recent successful analysis result
    pub fn result(&self) -> Option<&[Node]> {
        self.result.as_deref()
    }

    /// Human-readable description of the last failure
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Progress text for the current/last analysis
    pub fn progress(&self) -> Option<&str> {
        self.progress.as_deref()
    }

    /// Analyze a design screenshot and return the resulting components.
    ///
    /// Runs the full pipeline: settings persistence, data-URL encoding,
    /// the vision API call, JSON extraction, and normalization with fresh
    /// id assignment. Returns `None` on any failure, with the reason
    /// available from [`last_error`](Self::last_error).
    ///
    /// # Arguments
    ///
    /// * `image_bytes` - Raw screenshot bytes
    /// * `mime` - MIME type of the screenshot (e.g. "image/png")
    pub async fn analyze_image(&mut self, image_bytes: &[u8], mime: &str) -> Option<Vec<Node>> {
        if self.settings.api_key.is_empty() {
            self.last_error = Some(AnalysisError::MissingApiKey.to_string());
            return None;
        }

        self.is_analyzing = true;
        self.last_error = None;
        self.result = None;
        self.progress = Some("Reading image...".to_string());

        let outcome = self.run_pipeline(image_bytes, mime).await;
        self.is_analyzing = false;

        match outcome {
            Ok(nodes) => {
                debug!(components = nodes.len(), "design analysis complete");
                self.progress = Some("Analysis complete".to_string());
                self.result = Some(nodes.clone());
                Some(nodes)
            }
            Err(e) => {
                warn!("design analysis failed: {}", e);
                self.last_error = Some(e.to_string());
                self.progress = None;
                None
            }
        }
    }

    async fn run_pipeline(
        &mut self,
        image_bytes: &[u8],
        mime: &str,
    ) -> Result<Vec<Node>, AnalysisError> {
        // Settings are persisted before every call so a restarted UI picks
        // up whatever was last used; a failed write is not fatal here
        if !self.settings_store.save(&self.settings).await {
            warn!("failed to persist API settings before analysis");
        }

        let data_url = image_data_url(image_bytes, mime);
        self.progress = Some("Uploading to the model...".to_string());

        let client = VisionClient::new(self.settings.to_vision_config())?;
        let reply = client.describe_design(&data_url).await?;

        self.progress = Some("Parsing model reply...".to_string());
        let value = extract_json(&reply)?;

        self.progress = Some("Building components...".to_string());
        let nodes = normalize_nodes(value)?;

        Ok(nodes)
    }

    /// Clear the stored result, error, and progress text
    pub fn reset(&mut self) {
        self.result = None;
        self.last_error = None;
        self.progress = None;
    }
}
