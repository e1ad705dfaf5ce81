//! Notification read access and read-state updates.

use std::sync::Arc;

use uuid::Uuid;

use tenderwatch_core::error::AppError;
use tenderwatch_core::result::AppResult;
use tenderwatch_core::types::pagination::{PageRequest, PageResponse};
use tenderwatch_database::NotificationStore;
use tenderwatch_entity::Notification;

/// Query-side service for notifications.
#[derive(Clone)]
pub struct NotificationService {
    /// Notification store.
    store: Arc<dyn NotificationStore>,
}

impl NotificationService {
    /// Create a new notification service.
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// List notifications, newest first.
    pub async fn list(
        &self,
        unread_only: bool,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        self.store.list(unread_only, page).await
    }

    /// Count unread notifications.
    pub async fn unread_count(&self) -> AppResult<i64> {
        self.store.count_unread().await
    }

    /// Mark one notification as read.
    pub async fn mark_read(&self, id: Uuid) -> AppResult<()> {
        if !self.store.mark_read(id).await? {
            return Err(AppError::not_found(format!("Notification not found: {id}")));
        }
        Ok(())
    }

    /// Mark every unread notification as read. Returns the number updated.
    pub async fn mark_all_read(&self) -> AppResult<i64> {
        self.store.mark_all_read().await
    }
}
