//! Notification kind and delivery channel enumerations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What event a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    /// A single newly discovered tender.
    NewTender,
    /// Aggregate result of one scan cycle.
    ScanSummary,
}

impl NotificationKind {
    /// Return the kind as a kebab-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewTender => "new-tender",
            Self::ScanSummary => "scan-summary",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Delivery channel for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_channel", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    /// In-app dashboard feed.
    Dashboard,
    /// Email digest (recorded only; no transport is wired).
    Email,
}

impl NotificationChannel {
    /// Return the channel as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
