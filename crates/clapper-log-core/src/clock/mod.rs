mod manual_clock;
mod system_clock;

pub use {manual_clock::ManualClock, system_clock::SystemClock};

/// Source of wall-clock time for the shoot-day state machine.
///
/// Instants are epoch milliseconds rather than [`std::time::Instant`] so that
/// a persisted session can be resumed after a restart and its elapsed time
/// recomputed against a fresh `now`.
pub trait Clock: Send + Sync {
    /// Current time as milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Format an instant as an `HH:MM:SS` time-of-day label.
    fn time_of_day(&self, millis: i64) -> String;

    /// Format an instant as a `YYYY-MM-DD` date label.
    fn date_label(&self, millis: i64) -> String;
}
