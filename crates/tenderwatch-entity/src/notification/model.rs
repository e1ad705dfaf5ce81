//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::{NotificationChannel, NotificationKind};
use crate::tender::TenderPriority;

/// A persisted notification raised by the monitor.
///
/// Created exactly once per triggering event. The `read` flag is mutated
/// only by external consumers through the API, never by the monitor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// What event this notification reports.
    pub kind: NotificationKind,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Category label (mirrors the tender category, or "monitoring").
    pub category: String,
    /// Priority carried over from the tender, or `Medium` for summaries.
    pub priority: TenderPriority,
    /// Opaque structured payload: tender/portal ids for per-tender
    /// notifications, aggregate counts for summaries.
    pub payload: serde_json::Value,
    /// Delivery channels.
    pub channels: Vec<NotificationChannel>,
    /// Whether the notification has been read.
    pub read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification is unread.
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}
