use crate::{AppError, AppResult, config::Config};

use std::{fs, panic::Location, path::PathBuf};

use clapper_log_core::ShootDay;
use error_location::ErrorLocation;
use tracing::{info, instrument};

/// Writes the day's record log as `{dir}/{prefix}_{YYYY-MM-DD}.csv`.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    export_dir: PathBuf,
    file_prefix: String,
}

impl CsvExporter {
    /// Exporter writing into `export_dir`.
    pub fn new(export_dir: impl Into<PathBuf>, file_prefix: impl Into<String>) -> Self {
        Self {
            export_dir: export_dir.into(),
            file_prefix: file_prefix.into(),
        }
    }

    /// Exporter using the configured directory and prefix.
    #[track_caller]
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(config.export_dir()?, config.export.file_prefix.clone()))
    }

    /// Render and write the export, returning the file written.
    ///
    /// An empty log fails before anything touches the filesystem.
    #[track_caller]
    #[instrument(skip(self, day))]
    pub fn export(&self, day: &ShootDay) -> AppResult<PathBuf> {
        let csv = day.export_csv()?;

        fs::create_dir_all(&self.export_dir).map_err(|e| AppError::IoError {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let path = self
            .export_dir
            .join(format!("{}_{}.csv", self.file_prefix, day.date_label()));
        fs::write(&path, csv)?;

        info!(path = ?path, records = day.records().len(), "CSV exported");

        Ok(path)
    }
}
