//! # tenderwatch-entity
//!
//! Domain entity models shared across the TenderWatch crates.

pub mod notification;
pub mod portal;
pub mod tender;

pub use notification::{Notification, NotificationChannel, NotificationKind};
pub use portal::{Portal, PortalType};
pub use tender::{PriorityScorer, Tender, TenderDraft, TenderPriority, TenderStatus};
