use crate::{
    CoreResult, ShootError,
    clock::Clock,
    record::{Record, RecordLog},
    scene::{SceneId, ScenePool, parse_scene_list},
    shoot_day::{ChangeListener, ShootDayOptions, ShootDaySnapshot},
    timer::{RecordingSession, RecordingState, SetupTimer},
};

use std::{fmt, panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// All state of one shoot day: scene pool, selection, setup phase, live take
/// and completed records.
///
/// Every operation validates before it mutates. An `Err` means nothing
/// changed and no listener was notified; an `Ok` means the transition was
/// applied and the listener saw exactly one snapshot.
///
/// # Example
///
/// ```
/// use clapper_log_core::{ManualClock, ShootDay, ShootDayOptions, SceneId};
/// use std::sync::Arc;
///
/// let clock = ManualClock::at(0);
/// let mut day = ShootDay::new(Arc::new(clock.clone()), ShootDayOptions::default());
///
/// day.add_range(3).unwrap();
/// day.select_scene(SceneId::sequential(1)).unwrap();
/// day.start_recording().unwrap();
/// clock.advance_secs(42);
///
/// let record = day.stop_recording().unwrap();
/// assert_eq!(record.duration, "00:00:42");
/// ```
pub struct ShootDay {
    clock: Arc<dyn Clock>,
    options: ShootDayOptions,
    pool: ScenePool,
    selected_scene: Option<SceneId>,
    setup: Option<SetupTimer>,
    current: Option<RecordingSession>,
    records: RecordLog,
    listener: Option<Box<dyn ChangeListener>>,
}

impl ShootDay {
    /// Fresh, empty shoot day.
    pub fn new(clock: Arc<dyn Clock>, options: ShootDayOptions) -> Self {
        Self::restore(ShootDaySnapshot::default(), clock, options)
    }

    /// Rebuild a shoot day from a persisted snapshot.
    ///
    /// A setup phase in the snapshot is dropped when setup tracking is off.
    pub fn restore(
        snapshot: ShootDaySnapshot,
        clock: Arc<dyn Clock>,
        options: ShootDayOptions,
    ) -> Self {
        let ShootDaySnapshot {
            pool,
            selected_scene,
            setup,
            current,
            records,
        } = snapshot;

        if let Some(session) = &current {
            info!(
                session_id = %session.session_id(),
                scene = %session.scene(),
                state = %session.state(),
                "Restored live recording"
            );
        }

        Self {
            clock,
            options,
            pool,
            selected_scene,
            setup: setup.filter(|_| options.track_setup),
            current,
            records,
            listener: None,
        }
    }

    /// Capture the current state for persistence.
    pub fn snapshot(&self) -> ShootDaySnapshot {
        ShootDaySnapshot {
            pool: self.pool.clone(),
            selected_scene: self.selected_scene.clone(),
            setup: self.setup,
            current: self.current.clone(),
            records: self.records.clone(),
        }
    }

    /// Install the listener notified after every applied transition.
    pub fn set_listener(&mut self, listener: impl ChangeListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Behaviour switches in effect.
    pub fn options(&self) -> ShootDayOptions {
        self.options
    }

    /// Available scenes.
    pub fn pool(&self) -> &ScenePool {
        &self.pool
    }

    /// Completed takes.
    pub fn records(&self) -> &RecordLog {
        &self.records
    }

    /// Scene picked by the operator. Kept while its take is live.
    pub fn selected_scene(&self) -> Option<&SceneId> {
        self.selected_scene.as_ref()
    }

    /// The live take, if any.
    pub fn current(&self) -> Option<&RecordingSession> {
        self.current.as_ref()
    }

    /// Idle, running or paused.
    pub fn recording_state(&self) -> RecordingState {
        self.current
            .as_ref()
            .map_or(RecordingState::Idle, RecordingSession::state)
    }

    /// Whether a setup phase is live.
    pub fn is_setting_up(&self) -> bool {
        self.setup.is_some()
    }

    /// Whether any timer is live and the display needs refreshing.
    pub fn is_timing(&self) -> bool {
        self.is_setting_up() || self.recording_state().is_live()
    }

    /// Elapsed setup time, zero when no setup is live.
    pub fn setup_elapsed(&self) -> u64 {
        let now = self.clock.now_millis();
        self.setup.map_or(0, |setup| setup.elapsed(now))
    }

    /// Recording time of the live take excluding pauses, zero when idle.
    pub fn current_elapsed(&self) -> u64 {
        let now = self.clock.now_millis();
        self.current
            .as_ref()
            .map_or(0, |session| session.current_elapsed(now))
    }

    // ---------------------------------------------------------------------
    // Timer transitions
    // ---------------------------------------------------------------------

    /// Pick the scene to shoot next. Must be in the pool; not while rolling.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn select_scene(&mut self, scene: SceneId) -> CoreResult<()> {
        self.ensure_idle("select a scene")?;

        if !self.pool.contains(&scene) {
            return Err(ShootError::Validation {
                reason: format!("scene '{scene}' is not in the pool"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.selected_scene = Some(scene);
        self.notify();

        Ok(())
    }

    /// Begin the setup phase for the selected scene.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start_setup(&mut self) -> CoreResult<()> {
        if !self.options.track_setup {
            return Err(ShootError::Validation {
                reason: "setup tracking is disabled".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.selected_scene.is_none() {
            return Err(invalid("start setup", "no scene is selected"));
        }
        self.ensure_idle("start setup")?;
        if self.setup.is_some() {
            return Err(invalid("start setup", "setup is already running"));
        }

        let now = self.clock.now_millis();
        self.setup = Some(SetupTimer::start(now));
        info!(scene = ?self.selected_scene, "Setup started");
        self.notify();

        Ok(())
    }

    /// Start rolling on the selected scene.
    ///
    /// Takes over any live setup phase as the take's setup duration and
    /// removes the scene from the pool. The selection is kept so the operator
    /// can still see what is being shot.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start_recording(&mut self) -> CoreResult<Uuid> {
        let scene = match &self.selected_scene {
            Some(scene) if !scene.is_blank() => scene.clone(),
            _ => return Err(invalid("start recording", "no scene is selected")),
        };
        self.ensure_idle("start recording")?;

        let now = self.clock.now_millis();
        let setup_duration = SetupTimer::consume_and_clear(&mut self.setup, now);
        let session =
            RecordingSession::start(scene, now, self.clock.time_of_day(now), setup_duration);
        let session_id = session.session_id();

        if !self.pool.consume(session.scene()) {
            debug!(scene = %session.scene(), "Started scene was not in the pool");
        }

        info!(
            session_id = %session_id,
            scene = %session.scene(),
            setup_ms = ?setup_duration,
            "Recording started"
        );
        self.current = Some(session);
        self.notify();

        Ok(session_id)
    }

    /// Hold the clock of the running take.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn pause_recording(&mut self) -> CoreResult<()> {
        let now = self.clock.now_millis();
        match self.current.as_mut() {
            Some(session) if session.state() == RecordingState::Running => {
                session.pause(now);
                info!(session_id = %session.session_id(), "Recording paused");
            }
            Some(_) => return Err(invalid("pause", "already paused")),
            None => return Err(invalid("pause", "not recording")),
        }
        self.notify();

        Ok(())
    }

    /// Release the clock of the paused take.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn resume_recording(&mut self) -> CoreResult<()> {
        let now = self.clock.now_millis();
        match self.current.as_mut() {
            Some(session) if session.state() == RecordingState::Paused => {
                session.resume(now);
                info!(
                    session_id = %session.session_id(),
                    paused_ms = session.total_paused(now),
                    "Recording resumed"
                );
            }
            Some(_) => return Err(invalid("resume", "not paused")),
            None => return Err(invalid("resume", "not recording")),
        }
        self.notify();

        Ok(())
    }

    /// Cut. Turns the live take into a [`Record`] and appends it to the log.
    ///
    /// Stopping while paused excludes the still-open pause.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn stop_recording(&mut self) -> CoreResult<Record> {
        let Some(session) = self.current.take() else {
            return Err(invalid("stop", "not recording"));
        };

        let now = self.clock.now_millis();
        let record = session.finish(now, self.clock.time_of_day(now));

        info!(
            session_id = %record.session_id,
            scene = %record.scene,
            duration = %record.duration,
            setup_duration = ?record.setup_duration,
            notes = %record.notes,
            "Recording stopped"
        );

        self.records.append(record.clone());
        self.selected_scene = None;
        self.notify();

        Ok(record)
    }

    // ---------------------------------------------------------------------
    // Scene pool
    // ---------------------------------------------------------------------

    /// Append `s01..=s{end_inclusive}`.
    #[track_caller]
    pub fn add_range(&mut self, end_inclusive: u32) -> CoreResult<()> {
        self.pool.add_range(end_inclusive)?;
        self.notify();
        Ok(())
    }

    /// Append one custom scene.
    #[track_caller]
    pub fn add_custom(&mut self, name: &str) -> CoreResult<()> {
        self.pool.add_custom(name)?;
        self.notify();
        Ok(())
    }

    /// Parse a pasted schedule and append its scenes. Returns how many were added.
    #[track_caller]
    #[instrument(skip(self, raw), fields(raw_len = raw.len()))]
    pub fn import_scenes(&mut self, raw: &str) -> CoreResult<usize> {
        let batch = parse_scene_list(raw);
        self.pool.add_imported(&batch)?;
        info!(count = batch.len(), "Scenes imported");
        self.notify();
        Ok(batch.len())
    }

    /// Toggle the thumbnail special. Returns whether it is now present.
    pub fn toggle_thumbnail(&mut self) -> bool {
        let present = self.pool.toggle_thumbnail();
        self.notify();
        present
    }

    /// Toggle the monologue special. Returns whether it is now on.
    pub fn toggle_monologue(&mut self, person_name: Option<&str>) -> bool {
        let on = self.pool.toggle_monologue(person_name);
        self.notify();
        on
    }

    /// Live-update the monologue entry's person name.
    #[track_caller]
    pub fn rename_monologue(&mut self, person_name: Option<&str>) -> CoreResult<()> {
        self.pool.rename_monologue(person_name)?;
        self.notify();
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Record log
    // ---------------------------------------------------------------------

    /// Delete the record at `index`; out of range is a no-op returning `None`.
    pub fn delete_record(&mut self, index: usize) -> Option<Record> {
        let removed = self.records.delete_at(index)?;
        info!(index, scene = %removed.scene, "Record deleted");
        self.notify();
        Some(removed)
    }

    /// Export the log as CSV, dated today.
    #[track_caller]
    pub fn export_csv(&self) -> CoreResult<String> {
        let date = self.clock.date_label(self.clock.now_millis());
        self.records.export_csv(&date, self.options.track_setup)
    }

    /// Today's date label, as used for export rows and file names.
    pub fn date_label(&self) -> String {
        self.clock.date_label(self.clock.now_millis())
    }

    /// Clear scenes, selection, timers and records.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.pool.clear();
        self.selected_scene = None;
        self.setup = None;
        self.current = None;
        self.records.clear();
        info!("Shoot day reset");
        self.notify();
    }

    #[track_caller]
    fn ensure_idle(&self, action: &'static str) -> CoreResult<()> {
        match self.recording_state() {
            RecordingState::Idle => Ok(()),
            RecordingState::Running => Err(invalid(action, "recording")),
            RecordingState::Paused => Err(invalid(action, "paused")),
        }
    }

    fn notify(&mut self) {
        if self.listener.is_none() {
            return;
        }
        let snapshot = self.snapshot();
        if let Some(listener) = self.listener.as_mut() {
            listener.on_change(&snapshot);
        }
    }
}

impl fmt::Debug for ShootDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShootDay")
            .field("options", &self.options)
            .field("pool", &self.pool)
            .field("selected_scene", &self.selected_scene)
            .field("setup", &self.setup)
            .field("current", &self.current)
            .field("records", &self.records.len())
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

#[track_caller]
fn invalid(action: &'static str, state: &'static str) -> ShootError {
    debug!(action, state, "Transition rejected");
    ShootError::InvalidTransition {
        action,
        state,
        location: ErrorLocation::from(Location::caller()),
    }
}
