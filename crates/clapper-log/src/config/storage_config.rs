use crate::config::{default_debounce_ms, default_multi_day};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persistent store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the store file (None = platform data dir).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Window within which successive saves are coalesced.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Keep separate state per shoot day instead of one global day.
    #[serde(default = "default_multi_day")]
    pub multi_day: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            debounce_ms: default_debounce_ms(),
            multi_day: default_multi_day(),
        }
    }
}
