//! In-memory portal store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use tenderwatch_core::error::AppError;
use tenderwatch_core::result::AppResult;
use tenderwatch_entity::Portal;

use crate::stores::PortalStore;

/// Portal store backed by a concurrent map keyed on portal id.
#[derive(Debug, Default)]
pub struct MemoryPortalStore {
    portals: DashMap<String, Portal>,
}

impl MemoryPortalStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PortalStore for MemoryPortalStore {
    async fn upsert_seed(&self, portal: &Portal) -> AppResult<()> {
        self.portals
            .entry(portal.id.clone())
            .and_modify(|existing| {
                existing.name = portal.name.clone();
                existing.url = portal.url.clone();
                existing.portal_type = portal.portal_type;
                existing.active = portal.active;
            })
            .or_insert_with(|| portal.clone());
        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<Portal>> {
        let mut portals: Vec<Portal> = self.portals.iter().map(|e| e.value().clone()).collect();
        portals.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(portals)
    }

    async fn list_active(&self) -> AppResult<Vec<Portal>> {
        let mut portals: Vec<Portal> = self
            .portals
            .iter()
            .filter(|e| e.value().active)
            .map(|e| e.value().clone())
            .collect();
        portals.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(portals)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Portal>> {
        Ok(self.portals.get(id).map(|e| e.value().clone()))
    }

    async fn record_scan(
        &self,
        id: &str,
        scanned_at: DateTime<Utc>,
        new_tenders: i64,
    ) -> AppResult<()> {
        let mut portal = self
            .portals
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("Portal not found: {id}")))?;
        portal.last_scanned = Some(scanned_at);
        portal.new_tenders = new_tenders;
        portal.total_tenders += new_tenders;
        Ok(())
    }
}
