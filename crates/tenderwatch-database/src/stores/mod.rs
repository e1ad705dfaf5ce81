//! Store traits shared by every persistence backend.
//!
//! Services depend only on these traits; the concrete backend (PostgreSQL
//! or in-memory) is chosen at startup from `database.provider`.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use tenderwatch_core::result::AppResult;
use tenderwatch_core::types::pagination::{PageRequest, PageResponse};
use tenderwatch_entity::{Notification, Portal, Tender, TenderPriority, TenderStatus};

/// Filter parameters for tender listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TenderFilter {
    /// Restrict to a single portal.
    pub portal_id: Option<String>,
    /// Restrict to a lifecycle status.
    pub status: Option<TenderStatus>,
    /// Restrict to a priority level.
    pub priority: Option<TenderPriority>,
    /// Restrict to a category (exact, case-insensitive).
    pub category: Option<String>,
    /// Case-insensitive substring match over title and description.
    pub search: Option<String>,
}

/// Persistence operations for portals.
#[async_trait]
pub trait PortalStore: Send + Sync {
    /// Insert a portal if absent, otherwise refresh its catalog fields
    /// (name, url, type) while preserving scan counters.
    async fn upsert_seed(&self, portal: &Portal) -> AppResult<()>;

    /// List every portal, active or not.
    async fn list_all(&self) -> AppResult<Vec<Portal>>;

    /// List portals that participate in scan cycles.
    async fn list_active(&self) -> AppResult<Vec<Portal>>;

    /// Find a portal by id.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Portal>>;

    /// Record a completed scan: set `last_scanned`, overwrite `new_tenders`
    /// with this cycle's count and add it to `total_tenders`.
    async fn record_scan(
        &self,
        id: &str,
        scanned_at: DateTime<Utc>,
        new_tenders: i64,
    ) -> AppResult<()>;
}

/// Persistence operations for tenders.
#[async_trait]
pub trait TenderStore: Send + Sync {
    /// Insert a tender unless one with the same `(portal_id, external_id)`
    /// already exists. Returns `true` when the row was inserted.
    async fn insert_if_absent(&self, tender: &Tender) -> AppResult<bool>;

    /// Find a tender by surrogate id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Tender>>;

    /// List tenders matching the filter, newest first.
    async fn list(
        &self,
        filter: &TenderFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Tender>>;

    /// Count all stored tenders.
    async fn count(&self) -> AppResult<i64>;
}

/// Persistence operations for notifications.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Persist a notification.
    async fn insert(&self, notification: &Notification) -> AppResult<()>;

    /// List notifications, newest first, optionally only unread ones.
    async fn list(
        &self,
        unread_only: bool,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>>;

    /// Count unread notifications.
    async fn count_unread(&self) -> AppResult<i64>;

    /// Mark one notification as read. Returns `false` when no such
    /// notification exists.
    async fn mark_read(&self, id: Uuid) -> AppResult<bool>;

    /// Mark every unread notification as read. Returns the number updated.
    async fn mark_all_read(&self) -> AppResult<i64>;
}

/// The full set of stores wired for one backend.
#[derive(Clone)]
pub struct StoreSet {
    /// Portal store.
    pub portals: Arc<dyn PortalStore>,
    /// Tender store.
    pub tenders: Arc<dyn TenderStore>,
    /// Notification store.
    pub notifications: Arc<dyn NotificationStore>,
}

impl StoreSet {
    /// Build stores backed by in-process maps.
    pub fn memory() -> Self {
        Self {
            portals: Arc::new(memory::MemoryPortalStore::new()),
            tenders: Arc::new(memory::MemoryTenderStore::new()),
            notifications: Arc::new(memory::MemoryNotificationStore::new()),
        }
    }

    /// Build stores backed by PostgreSQL.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            portals: Arc::new(postgres::PgPortalStore::new(pool.clone())),
            tenders: Arc::new(postgres::PgTenderStore::new(pool.clone())),
            notifications: Arc::new(postgres::PgNotificationStore::new(pool)),
        }
    }
}
