//! # tenderwatch-service
//!
//! Business logic sitting between the stores and the transport layers:
//! portal registry and seeding, tender ingestion with deduplication,
//! notification creation and delivery.

pub mod broadcast;
pub mod notification;
pub mod portal;
pub mod scan;
pub mod tender;

pub use broadcast::{EventBroadcaster, NullBroadcaster, OutboundEvent};
pub use notification::{NotificationEmitter, NotificationService};
pub use portal::PortalRegistry;
pub use scan::ScanSummary;
pub use tender::{TenderDirectory, TenderIngest};
