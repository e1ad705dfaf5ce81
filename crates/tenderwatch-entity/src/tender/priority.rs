//! Tender priority and the pluggable scoring seam.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::draft::TenderDraft;

/// Derived priority of a tender.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "tender_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TenderPriority {
    /// Routine opportunity.
    Low,
    /// Worth a look.
    Medium,
    /// Significant value or close deadline.
    High,
    /// Drop everything.
    Urgent,
}

impl TenderPriority {
    /// Return the priority as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// One step up, saturating at `Urgent`.
    pub fn bumped(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High | Self::Urgent => Self::Urgent,
        }
    }
}

impl fmt::Display for TenderPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scoring seam for deriving a tender's priority.
///
/// The thresholds in the original system were ad hoc, so the scorer is
/// injectable rather than hard-coded into ingestion.
pub trait PriorityScorer: Send + Sync {
    /// Score a candidate at discovery time.
    fn score(&self, draft: &TenderDraft, now: DateTime<Utc>) -> TenderPriority;
}

/// Default scorer: tender value bands (INR) with a one-step bump when the
/// submission deadline is within seven days.
#[derive(Debug, Clone, Default)]
pub struct ValueBandScorer;

impl PriorityScorer for ValueBandScorer {
    fn score(&self, draft: &TenderDraft, now: DateTime<Utc>) -> TenderPriority {
        let base = if draft.value >= 500_000_000 {
            TenderPriority::Urgent
        } else if draft.value >= 100_000_000 {
            TenderPriority::High
        } else if draft.value >= 10_000_000 {
            TenderPriority::Medium
        } else {
            TenderPriority::Low
        };

        let closing_soon = draft.submission_deadline > now
            && draft.submission_deadline - now <= chrono::Duration::days(7);
        if closing_soon { base.bumped() } else { base }
    }
}
