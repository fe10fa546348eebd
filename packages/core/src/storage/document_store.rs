//! Document persistence
//!
//! The entire component tree is serialized as one JSON string under a
//! fixed slot. Both directions are non-fatal: failures are logged and
//! reported as `false`/`None`, never raised past this boundary, so a full
//! disk or a corrupt slot degrades to "nothing restored" instead of
//! crashing the editor.

use std::sync::Arc;

use tracing::{debug, error};

use super::slot_store::SlotStore;
use crate::models::Node;

/// Slot holding the serialized document
pub const DOCUMENT_SLOT: &str = "pagespace-data";

/// Whole-document persistence over a slot store
#[derive(Clone)]
pub struct DocumentStore {
    store: Arc<dyn SlotStore>,
}

impl DocumentStore {
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        Self { store }
    }

    /// Serialize the whole tree and write it under [`DOCUMENT_SLOT`].
    ///
    /// Returns whether the save succeeded. Failures are logged.
    pub async fn save(&self, nodes: &[Node]) -> bool {
        let serialized = match serde_json::to_string(nodes) {
            Ok(s) => s,
            Err(e) => {
                error!("Failed to serialize document: {}", e);
                return false;
            }
        };

        match self.store.write(DOCUMENT_SLOT, &serialized).await {
            Ok(()) => {
                debug!(nodes = nodes.len(), "document saved");
                true
            }
            Err(e) => {
                error!("Failed to save document: {}", e);
                false
            }
        }
    }

    /// Read and deserialize the stored tree.
    ///
    /// Returns `None` when no document was stored or when the stored data
    /// cannot be read or parsed. Node ids are preserved exactly as saved.
    pub async fn load(&self) -> Option<Vec<Node>> {
        let data = match self.store.read(DOCUMENT_SLOT).await {
            Ok(Some(data)) => data,
            Ok(None) => return None,
            Err(e) => {
                error!("Failed to read document: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&data) {
            Ok(nodes) => Some(nodes),
            Err(e) => {
                error!("Failed to parse stored document: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemorySlotStore, SlotStore};

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let store = DocumentStore::new(Arc::new(MemorySlotStore::new()));

        let tree = vec![
            Node::text("Hello"),
            Node::container(vec![Node::button("Go")]),
        ];

        assert!(store.save(&tree).await);
        let restored = store.load().await.unwrap();

        // Structurally equal, ids preserved
        assert_eq!(restored, tree);
    }

    #[tokio::test]
    async fn test_load_without_saved_document() {
        let store = DocumentStore::new(Arc::new(MemorySlotStore::new()));
        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_load_corrupt_document_returns_none() {
        let slots = Arc::new(MemorySlotStore::new());
        slots.write(DOCUMENT_SLOT, "not json at all").await.unwrap();

        let store = DocumentStore::new(slots);
        assert!(store.load().await.is_none());
    }
}
