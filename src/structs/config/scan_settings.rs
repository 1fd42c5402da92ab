use serde::{Deserialize, Serialize};
use crate::config::constants::DEFAULT_SCAN_TICK_INTERVAL_MS;

/// Settings for the scan simulation loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Milliseconds between progress ticks
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Fixed seed; scans are reproducible when set
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_SCAN_TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_SCAN_TICK_INTERVAL_MS
}
