//! Tender entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::draft::TenderDraft;
use super::priority::TenderPriority;
use super::status::TenderStatus;

/// A procurement opportunity discovered from a portal.
///
/// `(portal_id, external_id)` is unique: once persisted, a tender with the
/// same external id from the same portal is never re-inserted. Records are
/// not mutated or deleted by the monitor after creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tender {
    /// Surrogate identifier.
    pub id: Uuid,
    /// Owning portal.
    pub portal_id: String,
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
    /// Publish date.
    pub publish_date: DateTime<Utc>,
    /// Submission deadline.
    pub submission_deadline: DateTime<Utc>,
    /// Location of the work.
    pub location: String,
    /// Category label.
    pub category: String,
    /// Keywords from the source.
    pub keywords: Vec<String>,
    /// Display name of the source portal.
    pub source_name: String,
    /// URL of the source listing.
    pub source_url: String,
    /// Informational lifecycle status.
    pub status: TenderStatus,
    /// Derived priority.
    pub priority: TenderPriority,
    /// When the scan discovered this tender.
    pub discovered_at: DateTime<Utc>,
    /// When the record was first persisted.
    pub added_at: DateTime<Utc>,
}

impl Tender {
    /// Materialize a draft into a full record for a portal.
    pub fn from_draft(
        draft: TenderDraft,
        portal_id: impl Into<String>,
        priority: TenderPriority,
        now: DateTime<Utc>,
    ) -> Self {
        let status = TenderStatus::from_dates(draft.publish_date, draft.submission_deadline, now);
        Self {
            id: Uuid::new_v4(),
            portal_id: portal_id.into(),
            external_id: draft.external_id,
            title: draft.title,
            organization: draft.organization,
            description: draft.description,
            value: draft.value,
            publish_date: draft.publish_date,
            submission_deadline: draft.submission_deadline,
            location: draft.location,
            category: draft.category,
            keywords: draft.keywords,
            source_name: draft.source_name,
            source_url: draft.source_url,
            status,
            priority,
            discovered_at: now,
            added_at: now,
        }
    }
}
