//! Read access to persisted tenders.

use std::sync::Arc;

use uuid::Uuid;

use tenderwatch_core::error::AppError;
use tenderwatch_core::result::AppResult;
use tenderwatch_core::types::pagination::{PageRequest, PageResponse};
use tenderwatch_database::{TenderFilter, TenderStore};
use tenderwatch_entity::Tender;

/// Query-side service for tenders.
#[derive(Clone)]
pub struct TenderDirectory {
    /// Tender store.
    store: Arc<dyn TenderStore>,
}

impl TenderDirectory {
    /// Create a new tender directory.
    pub fn new(store: Arc<dyn TenderStore>) -> Self {
        Self { store }
    }

    /// List tenders matching a filter, newest first.
    pub async fn list(
        &self,
        filter: &TenderFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Tender>> {
        self.store.list(filter, page).await
    }

    /// Get one tender by id.
    pub async fn get(&self, id: Uuid) -> AppResult<Tender> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Tender not found: {id}")))
    }

    /// Total number of stored tenders.
    pub async fn count(&self) -> AppResult<i64> {
        self.store.count().await
    }
}
