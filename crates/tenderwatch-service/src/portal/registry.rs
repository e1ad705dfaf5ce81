//! Portal catalog seeding and lookups.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use tenderwatch_core::config::PortalSeed;
use tenderwatch_core::error::AppError;
use tenderwatch_core::result::AppResult;
use tenderwatch_database::PortalStore;
use tenderwatch_entity::{Portal, PortalType};

/// Manages the portal catalog.
#[derive(Clone)]
pub struct PortalRegistry {
    /// Portal store.
    store: Arc<dyn PortalStore>,
}

impl PortalRegistry {
    /// Create a new portal registry.
    pub fn new(store: Arc<dyn PortalStore>) -> Self {
        Self { store }
    }

    /// Seed the catalog from configuration.
    ///
    /// Idempotent: existing portals keep their scan counters, only catalog
    /// fields are refreshed. Safe to run while scans are in flight since
    /// insertion is keyed on the unique portal id.
    pub async fn seed(&self, seeds: &[PortalSeed]) -> AppResult<()> {
        let now = Utc::now();
        for seed in seeds {
            let portal = Portal::seeded(
                &seed.id,
                &seed.name,
                &seed.url,
                PortalType::parse(&seed.portal_type),
                now,
            );
            self.store.upsert_seed(&portal).await?;
        }
        info!(portals = seeds.len(), "Portal catalog seeded");
        Ok(())
    }

    /// List every portal.
    pub async fn list_all(&self) -> AppResult<Vec<Portal>> {
        self.store.list_all().await
    }

    /// List portals included in scan cycles.
    pub async fn list_active(&self) -> AppResult<Vec<Portal>> {
        self.store.list_active().await
    }

    /// Get one portal by id.
    pub async fn get(&self, id: &str) -> AppResult<Portal> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Portal not found: {id}")))
    }

    /// Record the outcome of a completed portal scan.
    pub async fn record_scan(
        &self,
        id: &str,
        scanned_at: DateTime<Utc>,
        new_tenders: i64,
    ) -> AppResult<()> {
        self.store.record_scan(id, scanned_at, new_tenders).await
    }
}

#[cfg(test)]
mod tests {
    use tenderwatch_database::stores::memory::MemoryPortalStore;

    use super::*;

    fn seeds() -> Vec<PortalSeed> {
        vec![
            PortalSeed {
                id: "gem".to_string(),
                name: "GeM".to_string(),
                url: "mock://gem".to_string(),
                portal_type: "government".to_string(),
            },
            PortalSeed {
                id: "larsen".to_string(),
                name: "L&T Procurement".to_string(),
                url: "mock://larsen".to_string(),
                portal_type: "private".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn seeding_twice_keeps_one_record_per_portal() {
        let registry = PortalRegistry::new(Arc::new(MemoryPortalStore::new()));
        registry.seed(&seeds()).await.unwrap();
        registry.seed(&seeds()).await.unwrap();

        let all = registry.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].portal_type, PortalType::Government);
        assert_eq!(all[1].portal_type, PortalType::Private);
    }

    #[tokio::test]
    async fn get_unknown_portal_is_not_found() {
        let registry = PortalRegistry::new(Arc::new(MemoryPortalStore::new()));
        let err = registry.get("nope").await.unwrap_err();
        assert_eq!(err.kind, tenderwatch_core::error::ErrorKind::NotFound);
    }
}
