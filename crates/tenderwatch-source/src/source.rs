//! The tender source trait.

use async_trait::async_trait;

use tenderwatch_core::result::AppResult;
use tenderwatch_entity::{Portal, TenderDraft};

/// A per-portal fetch strategy producing candidate tender drafts.
///
/// Draft ids are assigned by the source and are unique within the portal's
/// namespace. A failed fetch returns an error for that portal only; callers
/// must not let it abort other portals' scans.
#[async_trait]
pub trait TenderSource: Send + Sync {
    /// Fetch the portal's current candidate listings.
    async fn fetch(&self, portal: &Portal) -> AppResult<Vec<TenderDraft>>;
}
