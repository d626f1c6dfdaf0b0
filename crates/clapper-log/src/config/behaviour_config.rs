use crate::config::{default_tick_interval_ms, default_track_setup};

use serde::{Deserialize, Serialize};

/// Timer behaviour configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Whether the setup phase is tracked and exported.
    #[serde(default = "default_track_setup")]
    pub track_setup: bool,

    /// Display refresh cadence while a timer is live.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            track_setup: default_track_setup(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}
