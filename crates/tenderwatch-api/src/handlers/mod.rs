//! HTTP request handlers, grouped by domain.

pub mod health;
pub mod monitor;
pub mod notification;
pub mod portal;
pub mod tender;
pub mod ws;
