//! Request DTOs and query parameters.

use serde::Deserialize;

use tenderwatch_core::types::pagination::PageRequest;
use tenderwatch_database::TenderFilter;
use tenderwatch_entity::{TenderPriority, TenderStatus};

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    25
}

/// Query parameters for tender listings.
#[derive(Debug, Clone, Deserialize)]
pub struct TenderListQuery {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Restrict to a portal.
    pub portal_id: Option<String>,
    /// Restrict to a status.
    pub status: Option<TenderStatus>,
    /// Restrict to a priority.
    pub priority: Option<TenderPriority>,
    /// Restrict to a category.
    pub category: Option<String>,
    /// Substring search over title and description.
    pub search: Option<String>,
}

impl TenderListQuery {
    /// Split into store-level filter and page request.
    pub fn into_parts(self) -> (TenderFilter, PageRequest) {
        (
            TenderFilter {
                portal_id: self.portal_id,
                status: self.status,
                priority: self.priority,
                category: self.category,
                search: self.search,
            },
            PageRequest::new(self.page, self.page_size),
        )
    }
}

/// Query parameters for notification listings.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationListQuery {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Only unread notifications.
    #[serde(default)]
    pub unread_only: bool,
}
