//! Editor Services
//!
//! This module contains the editor-facing service layer:
//!
//! - `EditorState` - the authoritative document/selection/view-flag store
//! - `generate_html` - component tree to HTML export
//! - `DesignAnalyzer` - screenshot-to-components analysis pipeline
//! - `NotificationCenter` - self-expiring toast queue
//!
//! Services coordinate between the models, the storage layer, and the
//! vision engine; UI surfaces call into them and render their state.

pub mod analysis;
pub mod editor;
pub mod error;
pub mod html_export;
pub mod notification;


pub use analysis::DesignAnalyzer;
pub use editor::{ContextMenuState, DeviceMode, EditorState};
pub use error::AnalysisError;
pub use html_export::generate_html;
pub use notification::{NotificationCenter, Toast, ToastKind, TOAST_TTL};
