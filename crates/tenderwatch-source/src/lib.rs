//! # tenderwatch-source
//!
//! Per-portal tender fetch strategies. A [`TenderSource`] produces candidate
//! drafts for one portal; the [`SourceSelector`] picks a strategy from the
//! portal's URL scheme, and the [`KeywordFilter`] drops candidates with no
//! configured keyword in their text fields.

pub mod filter;
pub mod http;
pub mod mock;
pub mod selector;
pub mod source;

pub use filter::KeywordFilter;
pub use http::HttpTenderSource;
pub use mock::MockTenderSource;
pub use selector::{SourceRoute, SourceSelector};
pub use source::TenderSource;
