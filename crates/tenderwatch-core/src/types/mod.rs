//! Shared primitive types.

pub mod pagination;
