//! Outbound event publishing seam.
//!
//! The emitter publishes through this trait rather than a concrete
//! transport, so the realtime hub can be swapped for a no-op in tests.

use serde::Serialize;

use tenderwatch_entity::{Notification, Tender};

/// Events pushed to realtime subscribers.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum OutboundEvent {
    /// A newly persisted tender.
    NewTender(Tender),
    /// A newly created notification.
    NewNotification(Notification),
}

/// Fire-and-forget publisher for outbound events.
///
/// Implementations must not block and must tolerate having no subscribers.
pub trait EventBroadcaster: Send + Sync {
    /// Publish an event to all current subscribers.
    fn broadcast(&self, event: OutboundEvent);
}

/// A broadcaster that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBroadcaster;

impl EventBroadcaster for NullBroadcaster {
    fn broadcast(&self, _event: OutboundEvent) {}
}
