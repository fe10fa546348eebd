//! API settings persistence
//!
//! The three vision API settings (key, base URL, model) are stored under
//! individual fixed slots, loaded at startup, and saved immediately before
//! each analysis call. Missing slots fall back to defaults; read failures
//! are logged and treated as missing.

use std::sync::Arc;

use pagespace_vision_engine::config::{DEFAULT_API_BASE_URL, DEFAULT_MODEL};
use pagespace_vision_engine::VisionConfig;
use tracing::{error, warn};

use super::slot_store::SlotStore;

/// Slot holding the API key
pub const API_KEY_SLOT: &str = "pagespace-openai-key";

/// Slot holding the API base URL
pub const API_BASE_SLOT: &str = "pagespace-openai-base";

/// Slot holding the model name
pub const API_MODEL_SLOT: &str = "pagespace-openai-model";

/// User-configurable vision API settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub api_key: String,
    pub api_base_url: String,
    pub model: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ApiSettings {
    /// Build the vision engine configuration these settings describe
    pub fn to_vision_config(&self) -> VisionConfig {
        VisionConfig {
            api_key: self.api_key.clone(),
            api_base_url: self.api_base_url.clone(),
            model: self.model.clone(),
            ..VisionConfig::default()
        }
    }
}

/// Settings persistence over a slot store
#[derive(Clone)]
pub struct SettingsStore {
    store: Arc<dyn SlotStore>,
}

impl SettingsStore {
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        Self { store }
    }

    /// Load settings, filling defaults for missing or unreadable slots
    pub async fn load(&self) -> ApiSettings {
        let defaults = ApiSettings::default();
        ApiSettings {
            api_key: self.read_or(API_KEY_SLOT, defaults.api_key).await,
            api_base_url: self.read_or(API_BASE_SLOT, defaults.api_base_url).await,
            model: self.read_or(API_MODEL_SLOT, defaults.model).await,
        }
    }

    /// Persist all three settings slots.
    ///
    /// Returns whether every slot was written. Failures are logged.
    pub async fn save(&self, settings: &ApiSettings) -> bool {
        let writes = [
            (API_KEY_SLOT, settings.api_key.as_str()),
            (API_BASE_SLOT, settings.api_base_url.as_str()),
            (API_MODEL_SLOT, settings.model.as_str()),
        ];

        let mut ok = true;
        for (slot, value) in writes {
            if let Err(e) = self.store.write(slot, value).await {
                error!(slot, "Failed to save setting: {}", e);
                ok = false;
            }
        }
        ok
    }

    async fn read_or(&self, slot: &str, default: String) -> String {
        match self.store.read(slot).await {
            Ok(Some(value)) if !value.is_empty() => value,
            Ok(_) => default,
            Err(e) => {
                warn!(slot, "Failed to read setting, using default: {}", e);
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemorySlotStore, SlotStore};

    #[tokio::test]
    async fn test_load_fills_defaults_for_missing_slots() {
        let store = SettingsStore::new(Arc::new(MemorySlotStore::new()));
        let settings = store.load().await;

        assert!(settings.api_key.is_empty());
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.model, DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let store = SettingsStore::new(Arc::new(MemorySlotStore::new()));

        let settings = ApiSettings {
            api_key: "sk-secret".to_string(),
            api_base_url: "https://gateway.internal/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
        };

        assert!(store.save(&settings).await);
        assert_eq!(store.load().await, settings);
    }

    #[tokio::test]
    async fn test_partial_slots_mix_saved_and_default() {
        let slots = Arc::new(MemorySlotStore::new());
        slots.write(API_KEY_SLOT, "sk-only-key").await.unwrap();

        let store = SettingsStore::new(slots);
        let settings = store.load().await;

        assert_eq!(settings.api_key, "sk-only-key");
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_to_vision_config_carries_settings() {
        let settings = ApiSettings {
            api_key: "sk-a".to_string(),
            api_base_url: "https://example.com/v1".to_string(),
            model: "gpt-4o".to_string(),
        };
        let config = settings.to_vision_config();
        assert_eq!(config.api_key, "sk-a");
        assert_eq!(config.api_base_url, "https://example.com/v1");
        assert_eq!(config.max_tokens, 16_000);
    }
}
