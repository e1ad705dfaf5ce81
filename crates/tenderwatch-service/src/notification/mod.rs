//! Notification creation and read access.

pub mod emitter;
pub mod service;

pub use emitter::NotificationEmitter;
pub use service::NotificationService;
