//! Tender status enumeration.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Informational lifecycle status of a tender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "tender_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TenderStatus {
    /// Open for submissions.
    Active,
    /// Not yet published.
    Upcoming,
    /// Submission deadline has passed.
    Expired,
    /// An application was filed (set by consumers, never by the monitor).
    Applied,
}

impl TenderStatus {
    /// Derive the status from the publish/deadline dates at discovery time.
    pub fn from_dates(
        publish_date: DateTime<Utc>,
        submission_deadline: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        if publish_date > now {
            Self::Upcoming
        } else if submission_deadline < now {
            Self::Expired
        } else {
            Self::Active
        }
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Upcoming => "upcoming",
            Self::Expired => "expired",
            Self::Applied => "applied",
        }
    }
}

impl fmt::Display for TenderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
