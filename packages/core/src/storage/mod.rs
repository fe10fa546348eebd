//! Slot-Backed Persistence
//!
//! PageSpace persists two things: the whole document (one JSON string) and
//! the vision API settings (three strings), each under a fixed named slot.
//!
//! - `SlotStore` - storage abstraction with file and in-memory backends
//! - `DocumentStore` - save/load of the component tree
//! - `SettingsStore` / `ApiSettings` - vision API configuration
//!
//! All failures at this layer are logged and converted to boolean/absence
//! results; nothing here panics or propagates errors to callers.

mod document_store;
mod file_store;
mod settings;
mod slot_store;

pub use document_store::{DocumentStore, DOCUMENT_SLOT};
pub use file_store::FileSlotStore;
pub use settings::{
    ApiSettings, SettingsStore, API_BASE_SLOT, API_KEY_SLOT, API_MODEL_SLOT,
};
pub use slot_store::{MemorySlotStore, SlotStore, StorageError};
