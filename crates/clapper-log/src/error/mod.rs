use clapper_log_core::ShootError;

use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the clapper-log binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Shoot-day state machine rejected an operation.
    #[error("{source} {location}")]
    Core {
        /// The underlying core error.
        #[source]
        source: ShootError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Persistent store could not be read or written.
    #[error("Store error: {reason} {location}")]
    StoreError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Stored value could not be encoded or decoded.
    #[error("Serialization error: {source} {location}")]
    Serialization {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Operator input could not be understood.
    #[error("Invalid command: {reason} {location}")]
    InvalidCommand {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to send message through async channel.
    #[error("Channel send failed: {message} {location}")]
    ChannelSendFailed {
        /// Human-readable error message.
        message: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration loading or saving error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

impl AppError {
    /// The core error behind this one, if any.
    pub fn as_core(&self) -> Option<&ShootError> {
        match self {
            AppError::Core { source, .. } => Some(source),
            _ => None,
        }
    }
}

// Manual From<ShootError> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<ShootError> for AppError {
    #[track_caller]
    fn from(source: ShootError) -> Self {
        AppError::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        AppError::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        AppError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
