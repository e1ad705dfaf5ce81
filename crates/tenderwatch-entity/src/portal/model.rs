//! Portal entity model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Kind of procurement portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "portal_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PortalType {
    /// Government procurement site.
    Government,
    /// Private-sector procurement site.
    Private,
}

impl PortalType {
    /// Parse from a configuration string; anything unrecognized is treated
    /// as private.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "government" | "govt" => Self::Government,
            _ => Self::Private,
        }
    }

    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for PortalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An external source of tender listings.
///
/// Portal ids come from the seed catalog and are unique and immutable once
/// created. Scan counters are updated after every cycle; portals are never
/// deleted in normal operation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Portal {
    /// Stable portal identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Portal URL.
    pub url: String,
    /// Portal type.
    pub portal_type: PortalType,
    /// Whether the portal is included in scan cycles.
    pub active: bool,
    /// When the portal was last scanned.
    pub last_scanned: Option<DateTime<Utc>>,
    /// Cumulative count of tenders discovered on this portal.
    pub total_tenders: i64,
    /// Count of new tenders found by the most recent scan.
    pub new_tenders: i64,
    /// When the portal record was created.
    pub created_at: DateTime<Utc>,
}

impl Portal {
    /// Build a fresh portal record from seed data.
    pub fn seeded(
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        portal_type: PortalType,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            portal_type,
            active: true,
            last_scanned: None,
            total_tenders: 0,
            new_tenders: 0,
            created_at: now,
        }
    }
}
