use serde::{Deserialize, Serialize};

/// Liveness reporter configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeartbeatConfig {
    /// Collector address. Empty disables the reporter.
    #[serde(default)]
    pub address: String,

    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Per-beat delivery timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl HeartbeatConfig {
    pub fn is_enabled(&self) -> bool {
        !self.address.trim().is_empty()
    }
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            interval_secs: default_interval_secs(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_interval_secs() -> u64 {
    10
}

fn default_timeout_ms() -> u64 {
    2000
}
