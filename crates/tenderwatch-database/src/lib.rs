//! # tenderwatch-database
//!
//! Persistence layer for TenderWatch: store traits shared by all backends,
//! a PostgreSQL implementation backed by sqlx, and an in-memory
//! implementation used for development and tests.

pub mod connection;
pub mod stores;

pub use connection::DatabasePool;
pub use stores::{
    NotificationStore, PortalStore, StoreSet, TenderFilter, TenderStore,
};
