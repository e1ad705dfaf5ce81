//! Tender entity.

pub mod draft;
pub mod model;
pub mod priority;
pub mod status;

pub use draft::TenderDraft;
pub use model::Tender;
pub use priority::{PriorityScorer, TenderPriority, ValueBandScorer};
pub use status::TenderStatus;
