//! Configuration management for clapper-log.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{BehaviourConfig, ExportConfig, SessionConfig, StorageConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
    time::Duration,
};

use clapper_log_core::ShootDayOptions;
use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

const STORE_FILE_NAME: &str = "store.json";
const EXPORTS_DIR_NAME: &str = "exports";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Timer behaviour.
    #[serde(default)]
    pub behaviour: BehaviourConfig,
    /// Persistent store settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// CSV export settings.
    #[serde(default)]
    pub export: ExportConfig,
    /// User identity.
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Load configuration from the platform config dir, creating a default
    /// file if none exists.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!("No config found, creating default");
            let config = Config::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load and validate configuration from an explicit path.
    #[track_caller]
    #[instrument]
    pub fn load_from(config_path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        config.validate()?;

        info!(config_path = ?config_path, "Configuration loaded");

        Ok(config)
    }

    /// Reject settings the rest of the app cannot work with.
    #[track_caller]
    pub fn validate(&self) -> AppResult<()> {
        let user_id = self.session.user_id.trim();
        if user_id.is_empty() || user_id.contains('/') {
            return Err(AppError::ConfigError {
                reason: format!(
                    "session.user_id must be non-empty and contain no '/': {:?}",
                    self.session.user_id
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.behaviour.tick_interval_ms == 0 {
            return Err(AppError::ConfigError {
                reason: "behaviour.tick_interval_ms must be greater than zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.export.file_prefix.trim().is_empty() {
            return Err(AppError::ConfigError {
                reason: "export.file_prefix must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Save configuration using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Atomic write: write to temp file then rename
        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Behaviour switches handed to the core.
    pub fn shoot_day_options(&self) -> ShootDayOptions {
        ShootDayOptions {
            track_setup: self.behaviour.track_setup,
        }
    }

    /// Display refresh cadence.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.behaviour.tick_interval_ms)
    }

    /// Autosave coalescing window.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.storage.debounce_ms)
    }

    /// Path of the key/value store file.
    #[track_caller]
    pub fn store_path(&self) -> AppResult<PathBuf> {
        Ok(self.data_dir()?.join(STORE_FILE_NAME))
    }

    /// Directory CSV exports are written to.
    #[track_caller]
    pub fn export_dir(&self) -> AppResult<PathBuf> {
        match &self.export.export_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(self.data_dir()?.join(EXPORTS_DIR_NAME)),
        }
    }

    #[track_caller]
    fn data_dir(&self) -> AppResult<PathBuf> {
        let data_dir = match &self.storage.data_dir {
            Some(dir) => dir.clone(),
            None => Self::project_dirs()?.data_dir().to_path_buf(),
        };

        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)?;
            debug!(data_dir = ?data_dir, "Created data directory");
        }

        Ok(data_dir)
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = Self::project_dirs()?;
        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }

    #[track_caller]
    fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("com", "clapper-log", "ClapperLog").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get project directories".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
