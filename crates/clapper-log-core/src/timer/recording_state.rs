use std::fmt;

/// Observable state of the take currently being shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingState {
    /// No live session.
    Idle,
    /// Camera rolling.
    Running,
    /// Session live but the clock is held.
    Paused,
}

impl RecordingState {
    /// True for `Running` and `Paused`.
    pub fn is_live(self) -> bool {
        !matches!(self, RecordingState::Idle)
    }
}

impl fmt::Display for RecordingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordingState::Idle => "idle",
            RecordingState::Running => "recording",
            RecordingState::Paused => "paused",
        };
        f.write_str(label)
    }
}
