//! Shared application state threaded through all handlers.

use std::sync::Arc;
use std::time::Instant;

use tenderwatch_core::config::AppConfig;
use tenderwatch_database::DatabasePool;
use tenderwatch_monitor::MonitorScheduler;
use tenderwatch_realtime::BroadcastHub;
use tenderwatch_service::{NotificationService, PortalRegistry, TenderDirectory};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Portal catalog.
    pub portals: PortalRegistry,
    /// Tender queries.
    pub tenders: TenderDirectory,
    /// Notification queries and read-state updates.
    pub notifications: NotificationService,
    /// Scan scheduler control.
    pub scheduler: Arc<MonitorScheduler>,
    /// Realtime event hub.
    pub hub: Arc<BroadcastHub>,
    /// Database pool, absent for the in-memory backend.
    pub db: Option<DatabasePool>,
    /// Process start time, for uptime reporting.
    pub started_at: Instant,
}
