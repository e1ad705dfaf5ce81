//! One full scan cycle across all active portals.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::future::join_all;
use tokio::time::timeout;
use tracing::{info, warn};

use tenderwatch_core::error::AppError;
use tenderwatch_core::result::AppResult;
use tenderwatch_entity::Portal;
use tenderwatch_service::{
    NotificationEmitter, PortalRegistry, ScanSummary, TenderIngest,
};
use tenderwatch_source::{KeywordFilter, SourceRoute};

/// Executes one scan cycle: scatter per-portal fetches, gather all
/// outcomes, then aggregate.
///
/// One portal's failure never aborts the others; a bounded per-portal
/// timeout keeps a stuck source from stalling the cycle. There is no early
/// cancellation: the cycle waits for the slowest fetch.
pub struct ScanRunner {
    registry: PortalRegistry,
    ingest: TenderIngest,
    emitter: NotificationEmitter,
    route: Arc<dyn SourceRoute>,
    filter: KeywordFilter,
    fetch_timeout: Duration,
}

impl ScanRunner {
    /// Create a new runner.
    pub fn new(
        registry: PortalRegistry,
        ingest: TenderIngest,
        emitter: NotificationEmitter,
        route: Arc<dyn SourceRoute>,
        filter: KeywordFilter,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            registry,
            ingest,
            emitter,
            route,
            filter,
            fetch_timeout,
        }
    }

    /// Run one full cycle and emit the summary notification.
    pub async fn run_once(&self) -> AppResult<ScanSummary> {
        let started_at = Utc::now();
        let clock = tokio::time::Instant::now();

        let portals = self.registry.list_active().await?;
        info!(portals = portals.len(), "Scan cycle started");

        let outcomes = join_all(portals.iter().map(|p| self.scan_portal(p))).await;

        let mut total_new = 0u64;
        let mut successful = 0u64;
        let mut failed = 0u64;
        for (portal, outcome) in portals.iter().zip(outcomes) {
            match outcome {
                Ok(new_count) => {
                    successful += 1;
                    total_new += new_count;
                }
                Err(e) => {
                    failed += 1;
                    warn!(portal = %portal.id, error = %e, "Portal scan failed");
                }
            }
        }

        let summary = ScanSummary {
            started_at,
            duration_ms: clock.elapsed().as_millis() as u64,
            total_new_tenders: total_new,
            successful_portals: successful,
            failed_portals: failed,
        };

        self.emitter.emit_scan_summary(&summary).await?;

        info!(
            new_tenders = summary.total_new_tenders,
            successful = summary.successful_portals,
            failed = summary.failed_portals,
            duration_ms = summary.duration_ms,
            "Scan cycle finished"
        );
        Ok(summary)
    }

    /// Scan a single portal: fetch, filter, persist, notify, record.
    async fn scan_portal(&self, portal: &Portal) -> AppResult<u64> {
        let source = self.route.select(portal);

        let candidates = timeout(self.fetch_timeout, source.fetch(portal))
            .await
            .map_err(|_| {
                AppError::fetch(format!(
                    "Portal {} fetch timed out after {:?}",
                    portal.id, self.fetch_timeout
                ))
            })??;

        let relevant = self.filter.apply(candidates);
        let new = self
            .ingest
            .filter_new(&portal.id, relevant, Utc::now())
            .await?;

        // Notifications go out in candidate order; a failed emit skips
        // that tender only.
        for tender in &new {
            if let Err(e) = self.emitter.emit_new_tender(tender, portal).await {
                warn!(
                    portal = %portal.id,
                    external_id = %tender.external_id,
                    error = %e,
                    "Failed to emit tender notification"
                );
            }
        }

        self.registry
            .record_scan(&portal.id, Utc::now(), new.len() as i64)
            .await?;

        Ok(new.len() as u64)
    }
}
