use error_location::ErrorLocation;
use thiserror::Error;

/// Shoot-logging errors with source location tracking.
///
/// Every variant is raised before any state is touched, so an `Err` always
/// means the aggregate is exactly as it was before the call.
#[derive(Error, Debug)]
pub enum ShootError {
    /// Operation is not permitted in the current state (e.g. pause while idle).
    #[error("Cannot {action} while {state} {location}")]
    InvalidTransition {
        /// The rejected operation.
        action: &'static str,
        /// Human-readable description of the blocking state.
        state: &'static str,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Input failed validation (range bound, empty scene name, ...).
    #[error("Invalid input: {reason} {location}")]
    Validation {
        /// Description of what was wrong with the input.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// CSV export was requested for an empty record log.
    #[error("No records to export {location}")]
    NothingToExport {
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl ShootError {
    /// Whether this error is a rejected control input rather than bad data.
    ///
    /// Hosts treat these as a double-tapped button: log and move on.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, ShootError::InvalidTransition { .. })
    }
}

/// Result type alias using [`ShootError`].
pub type Result<T> = std::result::Result<T, ShootError>;
