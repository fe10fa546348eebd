//! Named slot storage
//!
//! Persistence in PageSpace is a handful of string values under fixed slot
//! names (the document, the API settings). `SlotStore` abstracts where
//! those strings live so the same document and settings code runs against
//! a directory on disk or an in-memory map in tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors from slot read/write operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String storage under fixed named slots
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Read the value stored under `slot`, if any
    async fn read(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `slot`, replacing any previous value
    async fn write(&self, slot: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `slot`; removing an absent slot is not
    /// an error
    async fn remove(&self, slot: &str) -> Result<(), StorageError>;
}

/// In-memory slot store for tests and ephemeral sessions
#[derive(Default, Clone)]
pub struct MemorySlotStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SlotStore for MemorySlotStore {
    async fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.lock().await.get(slot).cloned())
    }

    async fn write(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .lock()
            .await
            .insert(slot.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, slot: &str) -> Result<(), StorageError> {
        self.slots.lock().await.remove(slot);
        Ok(())
    }
}
