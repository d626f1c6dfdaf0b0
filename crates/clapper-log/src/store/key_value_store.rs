use crate::{AppResult, store::StoreKey};

/// String key/value persistence.
///
/// Implementations only move strings; encoding is the repository's concern.
pub trait KeyValueStore: Send {
    /// Read a value.
    fn get(&self, key: &StoreKey) -> AppResult<Option<String>>;

    /// Write a value.
    fn set(&mut self, key: &StoreKey, value: String) -> AppResult<()>;

    /// Delete a value; absent keys are not an error.
    fn remove(&mut self, key: &StoreKey) -> AppResult<()>;

    /// Every stored key whose rendered form starts with `prefix`.
    fn keys_with_prefix(&self, prefix: &str) -> AppResult<Vec<StoreKey>>;

    /// Apply several writes; `None` removes the key.
    ///
    /// Stores with per-write overhead override this to commit once.
    fn apply(&mut self, entries: Vec<(StoreKey, Option<String>)>) -> AppResult<()> {
        for (key, value) in entries {
            match value {
                Some(value) => self.set(&key, value)?,
                None => self.remove(&key)?,
            }
        }
        Ok(())
    }
}
