mod recording_session;
mod recording_state;
mod setup_timer;

pub use {
    recording_session::{INTERRUPTED_NOTE, RecordingSession},
    recording_state::RecordingState,
    setup_timer::SetupTimer,
};
