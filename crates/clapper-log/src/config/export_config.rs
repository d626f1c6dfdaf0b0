use crate::config::default_file_prefix;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CSV export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory CSV files are written to (None = `<data dir>/exports`).
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// File name prefix; the date is appended.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            export_dir: None,
            file_prefix: default_file_prefix(),
        }
    }
}
