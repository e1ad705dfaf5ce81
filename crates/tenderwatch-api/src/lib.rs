//! # tenderwatch-api
//!
//! The HTTP surface of TenderWatch: REST endpoints for monitor control and
//! data access, plus a websocket feed of realtime events.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
