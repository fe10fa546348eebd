//! Filesystem-backed slot store
//!
//! Each slot is one file inside a dedicated directory. Writes go through a
//! temp-file rename so a crash mid-write never leaves a slot truncated.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::slot_store::{SlotStore, StorageError};

/// Slot store keeping one file per slot under a directory
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(slot)
    }
}

#[async_trait]
impl SlotStore for FileSlotStore {
    async fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(slot)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).await?;

        let final_path = self.slot_path(slot);
        let temp_path = self.dir.join(format!("{}.tmp", slot));

        fs::write(&temp_path, value).await?;
        fs::rename(&temp_path, &final_path).await?;

        Ok(())
    }

    async fn remove(&self, slot: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.slot_path(slot)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
