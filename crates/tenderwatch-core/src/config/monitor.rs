//! Portal monitoring configuration.

use serde::{Deserialize, Serialize};

/// Portal monitoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Whether the monitor scheduler starts automatically.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Minutes between scan cycles.
    #[serde(default = "default_interval")]
    pub interval_minutes: u64,
    /// Per-portal fetch timeout in seconds. One slow portal must not stall
    /// the whole cycle indefinitely.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_seconds: u64,
    /// Relevance keywords. A candidate is kept when any keyword appears
    /// (case-insensitive) in its title, description, or keyword list.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    /// Portal catalog seeded at startup.
    #[serde(default)]
    pub portals: Vec<PortalSeed>,
}

/// One portal entry of the seed catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalSeed {
    /// Stable portal identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Portal URL. Non-http(s) URLs are served by the mock source.
    pub url: String,
    /// Portal type: `"government"` or `"private"`.
    #[serde(rename = "type")]
    pub portal_type: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_minutes: default_interval(),
            fetch_timeout_seconds: default_fetch_timeout(),
            keywords: default_keywords(),
            portals: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_interval() -> u64 {
    60
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_keywords() -> Vec<String> {
    [
        "metro",
        "railway",
        "rail",
        "station",
        "rolling stock",
        "signalling",
        "track",
        "platform",
        "electrification",
        "infrastructure",
        "civil works",
        "depot",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
