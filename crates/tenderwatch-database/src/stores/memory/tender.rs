//! In-memory tender store.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use tenderwatch_core::result::AppResult;
use tenderwatch_core::types::pagination::{PageRequest, PageResponse};
use tenderwatch_entity::Tender;

use crate::stores::{TenderFilter, TenderStore};

/// Tender store backed by concurrent maps.
///
/// The `seen` map enforces `(portal_id, external_id)` uniqueness through
/// its entry API, so concurrent inserts of the same tender race safely.
#[derive(Debug, Default)]
pub struct MemoryTenderStore {
    tenders: DashMap<Uuid, Tender>,
    seen: DashMap<(String, String), Uuid>,
}

impl MemoryTenderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(filter: &TenderFilter, tender: &Tender) -> bool {
    if let Some(portal_id) = &filter.portal_id {
        if &tender.portal_id != portal_id {
            return false;
        }
    }
    if let Some(status) = filter.status {
        if tender.status != status {
            return false;
        }
    }
    if let Some(priority) = filter.priority {
        if tender.priority != priority {
            return false;
        }
    }
    if let Some(category) = &filter.category {
        if !tender.category.eq_ignore_ascii_case(category) {
            return false;
        }
    }
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        if !tender.title.to_lowercase().contains(&needle)
            && !tender.description.to_lowercase().contains(&needle)
        {
            return false;
        }
    }
    true
}

#[async_trait]
impl TenderStore for MemoryTenderStore {
    async fn insert_if_absent(&self, tender: &Tender) -> AppResult<bool> {
        let key = (tender.portal_id.clone(), tender.external_id.clone());
        match self.seen.entry(key) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(vacant) => {
                vacant.insert(tender.id);
                self.tenders.insert(tender.id, tender.clone());
                Ok(true)
            }
        }
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Tender>> {
        Ok(self.tenders.get(&id).map(|e| e.value().clone()))
    }

    async fn list(
        &self,
        filter: &TenderFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Tender>> {
        let mut matched: Vec<Tender> = self
            .tenders
            .iter()
            .filter(|e| matches(filter, e.value()))
            .map(|e| e.value().clone())
            .collect();
        matched.sort_by(|a, b| {
            b.discovered_at
                .cmp(&a.discovered_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        let total = matched.len() as u64;
        let items: Vec<Tender> = matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tenders.len() as i64)
    }
}
