use crate::duration::clamp_elapsed;

use serde::{Deserialize, Serialize};

/// Pre-roll setup phase. Only its start instant is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupTimer {
    started_at: i64,
}

impl SetupTimer {
    /// Start a setup phase at `now` (epoch millis).
    pub fn start(now: i64) -> Self {
        Self { started_at: now }
    }

    /// Elapsed setup time, clamped at zero.
    pub fn elapsed(&self, now: i64) -> u64 {
        clamp_elapsed(now.saturating_sub(self.started_at))
    }

    /// Read the elapsed time out of an optional live phase and clear it.
    ///
    /// Called once, at the moment a recording starts.
    pub fn consume_and_clear(slot: &mut Option<SetupTimer>, now: i64) -> Option<u64> {
        slot.take().map(|timer| timer.elapsed(now))
    }
}
