//! The settings record.

use serde::{Deserialize, Serialize};

/// Configuration for one monitor run, persisted as flat JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Seconds to sleep between probe cycles.
    pub monitor_interval: u64,
    /// Probe target, either `host:port` or a full URL.
    pub gsocket_endpoint: String,
    /// Bound on restoration attempts per failure episode.
    pub max_retries: u32,
    /// Per-probe network timeout in seconds.
    pub timeout: u64,
    /// Gate for the maintenance phase.
    pub maintenance_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monitor_interval: 60,
            gsocket_endpoint: "localhost:8080".to_string(),
            max_retries: 3,
            timeout: 10,
            maintenance_enabled: true,
        }
    }
}
