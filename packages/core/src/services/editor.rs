//! Editor State
//!
//! `EditorState` is the single authoritative store for everything a canvas
//! UI displays: the document's node tree, the current selection, and the
//! view flags (preview mode, device frame, navigator panel, context menu).
//! It is an explicitly owned object handed to UI surfaces, so every
//! mutation site is auditable; there are no ambient globals.
//!
//! All operations are synchronous and run on the UI's single thread of
//! control. Persistence goes through [`DocumentStore`] and is the only
//! async seam.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Node;
use crate::operations::{count_nodes, delete_node, duplicate_node, find_node};
use crate::services::html_export::generate_html;
use crate::storage::DocumentStore;

/// Device frame used by the canvas preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceMode {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

/// Right-click context menu state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextMenuState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub target_id: Option<String>,
}

/// The editor's authoritative state
#[derive(Debug, Default)]
pub struct EditorState {
    components: Vec<Node>,
    selected_id: Option<String>,
    pub is_preview: bool,
    pub device_mode: DeviceMode,
    pub show_navigator: bool,
    pub context_menu: ContextMenuState,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document's root node sequence
    pub fn components(&self) -> &[Node] {
        &self.components
    }

    /// Append a component to the root sequence
    pub fn add_component(&mut self, component: Node) {
        self.components.push(component);
    }

    /// Select the node with the given id
    pub fn select_component(&mut self, id: impl Into<String>) {
        self.selected_id = Some(id.into());
    }

    /// Clear the selection
    pub fn deselect(&mut self) {
        self.selected_id = None;
    }

    /// Id of the currently selected node, if any
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// The currently selected node, resolved against the tree
    pub fn selected_component(&self) -> Option<&Node> {
        self.selected_id
            .as_deref()
            .and_then(|id| find_node(&self.components, id))
    }

    /// Delete the node with the given id.
    ///
    /// Clears the selection when it pointed at the removed node. Returns
    /// whether a removal occurred.
    pub fn delete_component(&mut self, id: &str) -> bool {
        let removed = delete_node(&mut self.components, id);
        if removed {
            debug!(id, "deleted component");
            if self.selected_id.as_deref() == Some(id) {
                self.selected_id = None;
            }
        }
        removed
    }

    /// Duplicate the node with the given id, inserting the copy right
    /// after the original. Returns whether a duplication occurred.
    pub fn duplicate_component(&mut self, id: &str) -> bool {
        duplicate_node(&mut self.components, id)
    }

    /// Replace the whole tree (load, analysis drop-in)
    pub fn replace_components(&mut self, components: Vec<Node>) {
        self.components = components;
        self.selected_id = None;
    }

    /// Remove every component and clear the selection
    pub fn clear_canvas(&mut self) {
        self.components.clear();
        self.selected_id = None;
    }

    /// Handle a Delete/Backspace key press.
    ///
    /// Deletes the selected node unless focus is inside a text input
    /// element (so typing never destroys canvas content). Returns whether
    /// a node was deleted.
    pub fn handle_delete_key(&mut self, focus_in_text_field: bool) -> bool {
        if focus_in_text_field {
            return false;
        }
        match self.selected_id.clone() {
            Some(id) => self.delete_component(&id),
            None => false,
        }
    }

    /// Open the context menu at the given canvas position
    pub fn open_context_menu(&mut self, x: f64, y: f64, target_id: impl Into<String>) {
        self.context_menu = ContextMenuState {
            visible: true,
            x,
            y,
            target_id: Some(target_id.into()),
        };
    }

    /// Close the context menu
    pub fn close_context_menu(&mut self) {
        self.context_menu = ContextMenuState::default();
    }

    /// Total node count, descendants included
    pub fn count(&self) -> usize {
        count_nodes(&self.components)
    }

    /// Export the document as an HTML string
    pub fn generate_html(&self) -> String {
        generate_html(&self.components)
    }

    /// Persist the document. Returns whether the save succeeded.
    pub async fn save(&self, store: &DocumentStore) -> bool {
        store.save(&self.components).await
    }

    /// Restore the document from storage, replacing the in-memory tree.
    /// Returns whether stored data was found and successfully restored.
    pub async fn load(&mut self, store: &DocumentStore) -> bool {
        match store.load().await {
            Some(components) => {
                self.replace_components(components);
                true
            }
            None => false,
        }
    }
}
