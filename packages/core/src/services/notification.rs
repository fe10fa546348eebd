//! Toast Notifications
//!
//! Headless toast queue: UI surfaces read [`NotificationCenter::active`]
//! and render however they like. Toasts expire on their own after
//! [`TOAST_TTL`]; removal is idempotent so an expiry racing a manual
//! dismissal is harmless.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

/// How long a toast stays visible
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// One queued toast
#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
    pub created_at: DateTime<Utc>,
}

/// Cheaply cloneable handle over the shared toast queue
#[derive(Default, Clone)]
pub struct NotificationCenter {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast and schedule its expiry. Returns the toast id.
    pub async fn notify(&self, message: impl Into<String>, kind: ToastKind) -> String {
        let toast = Toast {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            kind,
            created_at: Utc::now(),
        };
        let id = toast.id.clone();

        self.toasts.lock().await.push(toast);

        let center = self.clone();
        let expired_id = id.clone();
        tokio::spawn(async move {
            tokio::time::sleep(TOAST_TTL).await;
            center.dismiss(&expired_id).await;
        });

        id
    }

    /// Remove a toast by id. Removing an already-removed toast is a no-op.
    pub async fn dismiss(&self, id: &str) {
        let mut toasts = self.toasts.lock().await;
        if let Some(index) = toasts.iter().position(|t| t.id == id) {
            toasts.remove(index);
        }
    }

    /// Snapshot of the currently visible toasts, oldest first
    pub async fn active(&self) -> Vec<Toast> {
        self.toasts.lock().await.clone()
    }
}
