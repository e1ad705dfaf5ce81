//! Periodic scan scheduling.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use tenderwatch_service::ScanSummary;

use crate::runner::ScanRunner;

/// Snapshot of the scheduler for the status endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MonitorStatus {
    /// Whether a scan loop is currently scheduled.
    pub active: bool,
    /// Seconds between cycles.
    pub interval_seconds: u64,
    /// Cycles completed since process start.
    pub scans_completed: u64,
    /// Outcome of the most recent cycle.
    pub last_scan: Option<ScanSummary>,
}

struct ActiveLoop {
    cancel_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

/// Drives periodic scan cycles.
///
/// At most one loop is active per scheduler: a second `start()` is a no-op.
/// `stop()` prevents the next cycle from being scheduled but lets an
/// in-flight cycle run to completion.
pub struct MonitorScheduler {
    runner: Arc<ScanRunner>,
    interval: Duration,
    active: Mutex<Option<ActiveLoop>>,
    scans_completed: Arc<AtomicU64>,
    last_scan: Arc<Mutex<Option<ScanSummary>>>,
}

impl MonitorScheduler {
    /// Create a scheduler; does not start scanning.
    pub fn new(runner: Arc<ScanRunner>, interval: Duration) -> Self {
        Self {
            runner,
            interval,
            active: Mutex::new(None),
            scans_completed: Arc::new(AtomicU64::new(0)),
            last_scan: Arc::new(Mutex::new(None)),
        }
    }

    /// Start the scan loop. The first cycle runs immediately.
    ///
    /// Returns `false` without side effects when a loop is already active.
    pub fn start(&self) -> bool {
        let mut active = lock(&self.active);
        if let Some(current) = active.as_ref() {
            if !current.handle.is_finished() {
                info!("Monitor already running, start ignored");
                return false;
            }
        }

        let (cancel_tx, cancel_rx) = watch::channel(false);
        let runner = Arc::clone(&self.runner);
        let interval = self.interval;
        let scans_completed = Arc::clone(&self.scans_completed);
        let last_scan = Arc::clone(&self.last_scan);

        let handle = tokio::spawn(async move {
            run_loop(runner, interval, cancel_rx, scans_completed, last_scan).await;
        });

        *active = Some(ActiveLoop { cancel_tx, handle });
        info!(interval_seconds = interval.as_secs(), "Monitor started");
        true
    }

    /// Stop scheduling further cycles.
    ///
    /// Returns `false` when no loop is active. An in-flight cycle finishes.
    pub fn stop(&self) -> bool {
        let mut active = lock(&self.active);
        match active.take() {
            Some(current) => {
                // Receiver may be gone if the loop already exited.
                let _ = current.cancel_tx.send(true);
                info!("Monitor stopped");
                true
            }
            None => false,
        }
    }

    /// Whether a scan loop is currently scheduled.
    pub fn is_active(&self) -> bool {
        lock(&self.active)
            .as_ref()
            .map(|a| !a.handle.is_finished())
            .unwrap_or(false)
    }

    /// Current scheduler snapshot.
    pub fn status(&self) -> MonitorStatus {
        MonitorStatus {
            active: self.is_active(),
            interval_seconds: self.interval.as_secs(),
            scans_completed: self.scans_completed.load(Ordering::Relaxed),
            last_scan: lock(&self.last_scan).clone(),
        }
    }
}

async fn run_loop(
    runner: Arc<ScanRunner>,
    interval: Duration,
    mut cancel_rx: watch::Receiver<bool>,
    scans_completed: Arc<AtomicU64>,
    last_scan: Arc<Mutex<Option<ScanSummary>>>,
) {
    loop {
        match runner.run_once().await {
            Ok(summary) => {
                scans_completed.fetch_add(1, Ordering::Relaxed);
                *lock(&last_scan) = Some(summary);
            }
            Err(e) => {
                // A failed cycle does not stop the loop.
                error!(error = %e, "Scan cycle failed");
            }
        }

        tokio::select! {
            changed = cancel_rx.changed() => {
                // A dropped sender counts as cancellation.
                if changed.is_err() || *cancel_rx.borrow() {
                    info!("Monitor loop exiting");
                    break;
                }
            }
            _ = tokio::time::sleep(interval) => {}
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
