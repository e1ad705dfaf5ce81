//! # tenderwatch-realtime
//!
//! Fan-out of monitor events to websocket subscribers, built on a tokio
//! broadcast channel.

pub mod hub;

pub use hub::BroadcastHub;
