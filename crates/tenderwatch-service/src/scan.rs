//! Scan cycle outcome summary.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Aggregate result of one scan cycle across all active portals.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    /// When the cycle started.
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration of the cycle in milliseconds.
    pub duration_ms: u64,
    /// New tenders persisted across all portals.
    pub total_new_tenders: u64,
    /// Portals whose fetch and ingest completed.
    pub successful_portals: u64,
    /// Portals whose fetch failed or timed out.
    pub failed_portals: u64,
}

impl ScanSummary {
    /// Portals visited in this cycle.
    pub fn scanned_portals(&self) -> u64 {
        self.successful_portals + self.failed_portals
    }
}
