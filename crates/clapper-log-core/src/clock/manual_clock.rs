use crate::clock::Clock;

use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use chrono::{TimeZone, Utc};

/// Hand-driven clock for tests and replays. Labels are rendered in UTC.
///
/// Clones share the same underlying instant, so a test can keep one handle
/// and give another to the aggregate.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    /// Create a clock frozen at `millis` since the epoch.
    pub fn at(millis: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(millis)),
        }
    }

    /// Move the clock forward (or backward, for a negative value).
    pub fn advance_millis(&self, millis: i64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }

    /// Move the clock forward by whole seconds.
    pub fn advance_secs(&self, secs: i64) {
        self.advance_millis(secs * 1000);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }

    fn time_of_day(&self, millis: i64) -> String {
        match Utc.timestamp_millis_opt(millis).single() {
            Some(at) => at.format("%H:%M:%S").to_string(),
            None => String::from("--:--:--"),
        }
    }

    fn date_label(&self, millis: i64) -> String {
        match Utc.timestamp_millis_opt(millis).single() {
            Some(at) => at.format("%Y-%m-%d").to_string(),
            None => String::from("0000-00-00"),
        }
    }
}
