//! Tender ingestion with deduplication.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use tenderwatch_core::result::AppResult;
use tenderwatch_database::TenderStore;
use tenderwatch_entity::{PriorityScorer, Tender, TenderDraft};

/// Persists the "new" subset of fetched candidates.
///
/// Deduplication is two-layered: an in-batch set drops repeated external
/// ids within one fetch result, and the store's insert-if-absent primitive
/// guards against everything already persisted, including concurrent
/// writers. A failed insert skips that record only.
#[derive(Clone)]
pub struct TenderIngest {
    /// Tender store.
    store: Arc<dyn TenderStore>,
    /// Priority scoring strategy.
    scorer: Arc<dyn PriorityScorer>,
}

impl TenderIngest {
    /// Create a new ingest service.
    pub fn new(store: Arc<dyn TenderStore>, scorer: Arc<dyn PriorityScorer>) -> Self {
        Self { store, scorer }
    }

    /// Persist candidates not yet recorded for this portal.
    ///
    /// Returns the persisted tenders in the order the candidates appeared.
    pub async fn filter_new(
        &self,
        portal_id: &str,
        candidates: Vec<TenderDraft>,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<Tender>> {
        let mut seen_in_batch: HashSet<String> = HashSet::new();
        let mut persisted = Vec::new();

        for draft in candidates {
            if !seen_in_batch.insert(draft.external_id.clone()) {
                continue;
            }

            let priority = self.scorer.score(&draft, now);
            let tender = Tender::from_draft(draft, portal_id, priority, now);

            match self.store.insert_if_absent(&tender).await {
                Ok(true) => persisted.push(tender),
                Ok(false) => {}
                Err(e) => {
                    warn!(
                        portal = portal_id,
                        external_id = %tender.external_id,
                        error = %e,
                        "Failed to persist tender, skipping"
                    );
                }
            }
        }

        Ok(persisted)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Duration;
    use tenderwatch_core::error::AppError;
    use tenderwatch_core::types::pagination::{PageRequest, PageResponse};
    use tenderwatch_database::stores::memory::MemoryTenderStore;
    use tenderwatch_database::TenderFilter;
    use tenderwatch_entity::tender::ValueBandScorer;
    use tenderwatch_entity::TenderPriority;
    use uuid::Uuid;

    use super::*;

    /// Delegates to a memory store but rejects one external id.
    struct FailingIdStore {
        inner: MemoryTenderStore,
        failing_id: &'static str,
    }

    #[async_trait]
    impl TenderStore for FailingIdStore {
        async fn insert_if_absent(&self, tender: &Tender) -> AppResult<bool> {
            if tender.external_id == self.failing_id {
                return Err(AppError::database("Connection reset"));
            }
            self.inner.insert_if_absent(tender).await
        }

        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Tender>> {
            self.inner.find_by_id(id).await
        }

        async fn list(
            &self,
            filter: &TenderFilter,
            page: &PageRequest,
        ) -> AppResult<PageResponse<Tender>> {
            self.inner.list(filter, page).await
        }

        async fn count(&self) -> AppResult<i64> {
            self.inner.count().await
        }
    }

    fn draft(external_id: &str, value: i64) -> TenderDraft {
        let now = Utc::now();
        TenderDraft {
            external_id: external_id.to_string(),
            title: "Metro Station Works".to_string(),
            organization: "KMRL".to_string(),
            description: "Platform extension".to_string(),
            value,
            publish_date: now - Duration::days(1),
            submission_deadline: now + Duration::days(45),
            location: "Kochi".to_string(),
            category: "Civil Works".to_string(),
            keywords: vec!["metro".to_string()],
            source_name: "GeM".to_string(),
            source_url: "mock://gem".to_string(),
        }
    }

    fn ingest(store: Arc<MemoryTenderStore>) -> TenderIngest {
        TenderIngest::new(store, Arc::new(ValueBandScorer))
    }

    #[tokio::test]
    async fn repeated_id_within_one_batch_is_persisted_once() {
        let store = Arc::new(MemoryTenderStore::new());
        let svc = ingest(store.clone());

        let new = svc
            .filter_new(
                "gem",
                vec![draft("T-1", 1_000_000), draft("T-1", 1_000_000)],
                Utc::now(),
            )
            .await
            .unwrap();

        assert_eq!(new.len(), 1);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn rescan_with_partial_overlap_persists_only_new() {
        let store = Arc::new(MemoryTenderStore::new());
        let svc = ingest(store.clone());

        let first = svc
            .filter_new("gem", vec![draft("T-1", 1_000_000)], Utc::now())
            .await
            .unwrap();
        assert_eq!(first.len(), 1);

        let second = svc
            .filter_new(
                "gem",
                vec![draft("T-1", 1_000_000), draft("T-3", 2_000_000)],
                Utc::now(),
            )
            .await
            .unwrap();

        assert_eq!(second.len(), 1);
        assert_eq!(second[0].external_id, "T-3");
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn failed_insert_skips_that_record_only() {
        let store = Arc::new(FailingIdStore {
            inner: MemoryTenderStore::new(),
            failing_id: "T-2",
        });
        let svc = TenderIngest::new(store.clone(), Arc::new(ValueBandScorer));

        let new = svc
            .filter_new(
                "gem",
                vec![
                    draft("T-1", 1_000_000),
                    draft("T-2", 1_000_000),
                    draft("T-3", 1_000_000),
                ],
                Utc::now(),
            )
            .await
            .unwrap();

        let ids: Vec<&str> = new.iter().map(|t| t.external_id.as_str()).collect();
        assert_eq!(ids, ["T-1", "T-3"]);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn priority_comes_from_the_scorer() {
        let store = Arc::new(MemoryTenderStore::new());
        let svc = ingest(store);

        let new = svc
            .filter_new("gem", vec![draft("T-9", 600_000_000)], Utc::now())
            .await
            .unwrap();

        assert_eq!(new[0].priority, TenderPriority::Urgent);
    }
}
