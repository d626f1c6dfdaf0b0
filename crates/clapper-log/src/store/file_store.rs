//! JSON-file-backed key/value store.
//!
//! The whole map lives in memory and is rewritten atomically on every
//! commit. A failed commit keeps the in-memory value, so the next successful
//! commit also carries it to disk.

use crate::{
    AppError, AppResult,
    store::{KeyValueStore, StoreKey},
};

use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Key/value store persisted as one JSON object on disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file does not exist.
    #[track_caller]
    #[instrument]
    pub fn open(path: &Path) -> AppResult<Self> {
        let values = if path.exists() {
            let contents = fs::read_to_string(path).map_err(|e| AppError::StoreError {
                reason: format!("Failed to read store {}: {}", path.display(), e),
                location: ErrorLocation::from(Location::caller()),
            })?;
            serde_json::from_str(&contents)?
        } else {
            debug!(path = ?path, "No store file yet, starting empty");
            BTreeMap::new()
        };

        info!(path = ?path, keys = values.len(), "Store opened");

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// Atomic write: temp file, fsync, rename.
    #[track_caller]
    fn commit(&self) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(&self.values)?;
        let temp_path = self.path.with_extension("json.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::StoreError {
            reason: format!("Failed to create temp store file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::StoreError {
                reason: format!("Failed to write temp store file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::StoreError {
            reason: format!("Failed to sync temp store file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            warn!(error = %e, path = ?self.path, "Store rename failed");
            return Err(AppError::StoreError {
                reason: format!("Failed to rename temp store to final: {}", e),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!(keys = self.values.len(), "Store committed");

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &StoreKey) -> AppResult<Option<String>> {
        Ok(self.values.get(&key.to_string()).cloned())
    }

    fn set(&mut self, key: &StoreKey, value: String) -> AppResult<()> {
        self.values.insert(key.to_string(), value);
        self.commit()
    }

    fn remove(&mut self, key: &StoreKey) -> AppResult<()> {
        if self.values.remove(&key.to_string()).is_some() {
            self.commit()?;
        }
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> AppResult<Vec<StoreKey>> {
        Ok(self
            .values
            .keys()
            .filter(|raw| raw.starts_with(prefix))
            .filter_map(|raw| StoreKey::parse(raw))
            .collect())
    }

    fn apply(&mut self, entries: Vec<(StoreKey, Option<String>)>) -> AppResult<()> {
        for (key, value) in entries {
            match value {
                Some(value) => {
                    self.values.insert(key.to_string(), value);
                }
                None => {
                    self.values.remove(&key.to_string());
                }
            }
        }
        self.commit()
    }
}
