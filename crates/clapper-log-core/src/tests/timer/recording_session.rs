use crate::{INTERRUPTED_NOTE, RecordingSession, RecordingState, SceneId};

const T0: i64 = 10_000_000;

fn session(setup: Option<u64>) -> RecordingSession {
    RecordingSession::start(SceneId::sequential(1), T0, "09:00:00".to_string(), setup)
}

/// WHAT: A fresh session is running with zero pause
/// WHY: Establishes the initial state of every take
#[test]
fn given_new_session_when_inspecting_then_running_and_unpaused() {
    // Given/When: A session just started
    let session = session(None);

    // Then: Running, never paused, elapsed grows with now
    assert_eq!(session.state(), RecordingState::Running);
    assert!(!session.has_been_paused());
    assert_eq!(session.total_paused(T0 + 4_000), 0);
    assert_eq!(session.current_elapsed(T0 + 4_000), 4_000);
}

/// WHAT: Multiple pause/resume cycles subtract their summed length
/// WHY: Total recording time is independent of how pauses were split
#[test]
fn given_two_pauses_when_finishing_then_duration_excludes_both() {
    // Given: Start, run 10s, pause 3s, run 5s, pause 4s, run 2s
    let mut session = session(None);
    session.pause(T0 + 10_000);
    session.resume(T0 + 13_000);
    session.pause(T0 + 18_000);
    session.resume(T0 + 22_000);

    // When: Finishing at T0 + 24s
    let record = session.finish(T0 + 24_000, "09:00:24".to_string());

    // Then: 24 - 3 - 4 = 17 seconds
    assert_eq!(record.duration, "00:00:17");
    assert_eq!(record.notes, INTERRUPTED_NOTE);
}

/// WHAT: Finishing while paused folds the open pause
/// WHY: The still-open pause must not count as recording time
#[test]
fn given_paused_session_when_finishing_then_open_pause_excluded() {
    // Given: Run 8s then pause
    let mut session = session(None);
    session.pause(T0 + 8_000);

    // When: Finishing 30s into the pause, without resuming
    let record = session.finish(T0 + 38_000, "09:00:38".to_string());

    // Then: Only the 8s of rolling count
    assert_eq!(record.duration, "00:00:08");
}

/// WHAT: Elapsed time freezes while paused
/// WHY: The display must stop counting when the take is held
#[test]
fn given_paused_session_when_time_passes_then_elapsed_constant() {
    // Given: Paused at 6s
    let mut session = session(None);
    session.pause(T0 + 6_000);

    // When/Then: Elapsed stays at 6s however long the pause lasts
    assert_eq!(session.state(), RecordingState::Paused);
    assert_eq!(session.current_elapsed(T0 + 7_000), 6_000);
    assert_eq!(session.current_elapsed(T0 + 600_000), 6_000);
}

/// WHAT: Elapsed time clamps at zero under clock skew
/// WHY: A device clock set backwards after a reload must not underflow
#[test]
fn given_now_before_start_when_reading_elapsed_then_zero() {
    // Given/When/Then
    assert_eq!(session(None).current_elapsed(T0 - 60_000), 0);
}

/// WHAT: Unpaused takes have empty notes and carry setup time
/// WHY: Records distinguish clean takes and keep the pre-roll duration
#[test]
fn given_clean_take_with_setup_when_finishing_then_setup_formatted() {
    // Given: A session that carried 65s of setup
    let session = session(Some(65_000));

    // When: Finishing after 90s
    let record = session.finish(T0 + 90_000, "09:01:30".to_string());

    // Then: Formatted fields
    assert_eq!(record.start_time, "09:00:00");
    assert_eq!(record.end_time, "09:01:30");
    assert_eq!(record.duration, "00:01:30");
    assert_eq!(record.setup_duration.as_deref(), Some("00:01:05"));
    assert!(record.notes.is_empty());
    assert_eq!(record.timestamp, T0 + 90_000);
}

/// WHAT: Instants at the ends of the i64 range saturate instead of overflowing
/// WHY: Stored instants can be corrupt and elapsed is read on every tick
#[test]
fn given_extreme_instants_when_reading_elapsed_then_saturated_without_panic() {
    // Given: A take stamped at the earliest representable instant
    let mut session =
        RecordingSession::start(SceneId::sequential(1), i64::MIN, "00:00:00".to_string(), None);
    let max_span = u64::try_from(i64::MAX).unwrap_or(0);

    // When/Then: Elapsed saturates at the largest span
    assert_eq!(session.current_elapsed(i64::MAX), max_span);

    // When: Paused at the start and resumed at the far end
    session.pause(i64::MIN);
    session.resume(i64::MAX);

    // Then: The pause swallows the whole span, nothing wraps
    assert_eq!(session.total_paused(i64::MAX), max_span);
    assert_eq!(session.current_elapsed(i64::MAX), 0);
}
