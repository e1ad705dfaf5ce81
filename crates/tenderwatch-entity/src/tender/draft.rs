//! Candidate tender shape produced by sources, before persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate tender fetched from a portal.
///
/// Drafts carry only what the source knows: no surrogate id, portal id,
/// status, priority, or discovery timestamps. The `external_id` is the
/// source-assigned identifier, unique within the portal's namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenderDraft {
    /// Source-assigned identifier, unique per portal.
    pub external_id: String,
    /// Tender title.
    pub title: String,
    /// Issuing organization.
    pub organization: String,
    /// Free-text description.
    pub description: String,
    /// Estimated tender value in INR.
    pub value: i64,
    /// When the tender was (or will be) published.
    pub publish_date: DateTime<Utc>,
    /// Submission deadline.
    pub submission_deadline: DateTime<Utc>,
    /// Location of the work.
    pub location: String,
    /// Category label (e.g. "Rolling Stock", "Civil Works").
    pub category: String,
    /// Source-provided keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Display name of the source portal.
    pub source_name: String,
    /// URL of the source listing.
    pub source_url: String,
}
