use crate::clock::Clock;

use chrono::{Local, TimeZone, Utc};

/// Wall clock in the operator's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn time_of_day(&self, millis: i64) -> String {
        match Local.timestamp_millis_opt(millis).single() {
            Some(at) => at.format("%H:%M:%S").to_string(),
            None => String::from("--:--:--"),
        }
    }

    fn date_label(&self, millis: i64) -> String {
        match Local.timestamp_millis_opt(millis).single() {
            Some(at) => at.format("%Y-%m-%d").to_string(),
            None => String::from("0000-00-00"),
        }
    }
}
