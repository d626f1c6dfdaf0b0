use crate::{AppError, AppResult};

use std::{fmt, panic::Location};

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Name of a shoot day, e.g. `2026-10-14` or `pickup-day`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShootDayId(String);

impl ShootDayId {
    /// Validate and wrap a day name: trimmed, non-empty, no `/`.
    #[track_caller]
    pub fn parse(raw: &str) -> AppResult<Self> {
        let id = raw.trim();
        if id.is_empty() || id.contains('/') {
            return Err(AppError::InvalidCommand {
                reason: format!("shoot day id must be non-empty and contain no '/': {raw:?}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self(id.to_string()))
    }
}

impl fmt::Display for ShootDayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
