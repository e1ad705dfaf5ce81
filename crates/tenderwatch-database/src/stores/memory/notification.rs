//! In-memory notification store.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use tenderwatch_core::result::AppResult;
use tenderwatch_core::types::pagination::{PageRequest, PageResponse};
use tenderwatch_entity::Notification;

use crate::stores::NotificationStore;

/// Notification store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryNotificationStore {
    notifications: DashMap<Uuid, Notification>,
}

impl MemoryNotificationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn insert(&self, notification: &Notification) -> AppResult<()> {
        self.notifications
            .insert(notification.id, notification.clone());
        Ok(())
    }

    async fn list(
        &self,
        unread_only: bool,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let mut matched: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|e| !unread_only || !e.value().read)
            .map(|e| e.value().clone())
            .collect();
        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        let total = matched.len() as u64;
        let items: Vec<Notification> = matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn count_unread(&self) -> AppResult<i64> {
        Ok(self
            .notifications
            .iter()
            .filter(|e| !e.value().read)
            .count() as i64)
    }

    async fn mark_read(&self, id: Uuid) -> AppResult<bool> {
        match self.notifications.get_mut(&id) {
            Some(mut entry) => {
                entry.read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_all_read(&self) -> AppResult<i64> {
        let mut updated = 0;
        for mut entry in self.notifications.iter_mut() {
            if !entry.read {
                entry.read = true;
                updated += 1;
            }
        }
        Ok(updated)
    }
}
