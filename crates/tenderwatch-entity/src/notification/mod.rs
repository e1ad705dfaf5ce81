//! Notification entity.

pub mod kind;
pub mod model;

pub use kind::{NotificationChannel, NotificationKind};
pub use model::Notification;
