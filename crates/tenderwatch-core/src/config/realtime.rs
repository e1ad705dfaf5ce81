//! Real-time broadcast configuration.

use serde::{Deserialize, Serialize};

/// Real-time broadcast hub configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Capacity of the broadcast channel. Slow subscribers past this many
    /// undelivered events start lagging and miss messages.
    #[serde(default = "default_capacity")]
    pub channel_capacity: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    256
}
