//! Broadcast hub.

use tokio::sync::broadcast;
use tracing::{debug, trace};

use tenderwatch_service::{EventBroadcaster, OutboundEvent};

/// Fan-out hub for outbound events.
///
/// Wraps a tokio broadcast channel: every websocket connection holds its
/// own receiver and slow consumers lag independently. Publishing with no
/// subscribers is a no-op.
#[derive(Debug)]
pub struct BroadcastHub {
    sender: broadcast::Sender<OutboundEvent>,
}

impl BroadcastHub {
    /// Create a hub with the given per-subscriber buffer capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Open a new subscription.
    pub fn subscribe(&self) -> broadcast::Receiver<OutboundEvent> {
        debug!(
            subscribers = self.sender.receiver_count() + 1,
            "Realtime subscriber attached"
        );
        self.sender.subscribe()
    }

    /// Number of attached subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl EventBroadcaster for BroadcastHub {
    fn broadcast(&self, event: OutboundEvent) {
        // Err means no receivers; events are not queued for future ones.
        if let Err(e) = self.sender.send(event) {
            trace!(error = %e, "No realtime subscribers for event");
        }
    }
}
