//! # tenderwatch-monitor
//!
//! The scan cycle: fan-out fetch across active portals, ingest and notify,
//! and the periodic scheduler driving it.

pub mod runner;
pub mod scheduler;

pub use runner::ScanRunner;
pub use scheduler::{MonitorScheduler, MonitorStatus};
