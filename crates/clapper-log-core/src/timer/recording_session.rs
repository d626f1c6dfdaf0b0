use crate::{
    duration::{clamp_elapsed, format_duration},
    record::Record,
    scene::SceneId,
    timer::RecordingState,
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Note attached to a record whose take was paused at least once.
pub const INTERRUPTED_NOTE: &str = "interrupted";

/// The live take.
///
/// Holds instants and accumulated pause time only; elapsed time is always
/// derived from `now` so a session restored after a restart keeps counting.
/// Transition guards live on `ShootDay`, which owns the one permitted session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingSession {
    session_id: Uuid,
    scene: SceneId,
    started_at: i64,
    start_clock: String,
    paused_total: u64,
    paused_at: Option<i64>,
    has_been_paused: bool,
    setup_duration: Option<u64>,
}

impl RecordingSession {
    /// Begin a take of `scene` at `now`.
    pub fn start(
        scene: SceneId,
        now: i64,
        start_clock: String,
        setup_duration: Option<u64>,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            scene,
            started_at: now,
            start_clock,
            paused_total: 0,
            paused_at: None,
            has_been_paused: false,
            setup_duration,
        }
    }

    /// Unique id for log correlation.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Scene being shot.
    pub fn scene(&self) -> &SceneId {
        &self.scene
    }

    /// Time-of-day label captured at start.
    pub fn start_clock(&self) -> &str {
        &self.start_clock
    }

    /// Setup time carried over from the pre-roll phase.
    pub fn setup_duration(&self) -> Option<u64> {
        self.setup_duration
    }

    /// Whether the take was ever paused.
    pub fn has_been_paused(&self) -> bool {
        self.has_been_paused
    }

    /// `Running` or `Paused`.
    pub fn state(&self) -> RecordingState {
        if self.paused_at.is_some() {
            RecordingState::Paused
        } else {
            RecordingState::Running
        }
    }

    /// Hold the clock. Caller guarantees the session is running.
    pub(crate) fn pause(&mut self, now: i64) {
        self.paused_at = Some(now);
        self.has_been_paused = true;
    }

    /// Release the clock. Caller guarantees the session is paused.
    pub(crate) fn resume(&mut self, now: i64) {
        if let Some(paused_at) = self.paused_at.take() {
            self.paused_total = self
                .paused_total
                .saturating_add(clamp_elapsed(now.saturating_sub(paused_at)));
        }
    }

    /// Total paused time including a still-open pause.
    pub fn total_paused(&self, now: i64) -> u64 {
        let open = self
            .paused_at
            .map_or(0, |paused_at| clamp_elapsed(now.saturating_sub(paused_at)));
        self.paused_total.saturating_add(open)
    }

    /// Recording time so far, excluding pauses, clamped at zero.
    pub fn current_elapsed(&self, now: i64) -> u64 {
        clamp_elapsed(now.saturating_sub(self.started_at)).saturating_sub(self.total_paused(now))
    }

    /// Close the take at `now`, folding any open pause into the total.
    pub(crate) fn finish(self, now: i64, end_clock: String) -> Record {
        let duration = self.current_elapsed(now);

        Record {
            session_id: self.session_id,
            scene: self.scene,
            start_time: self.start_clock,
            end_time: end_clock,
            duration: format_duration(duration),
            setup_duration: self.setup_duration.map(format_duration),
            notes: if self.has_been_paused {
                INTERRUPTED_NOTE.to_string()
            } else {
                String::new()
            },
            timestamp: now,
        }
    }
}
