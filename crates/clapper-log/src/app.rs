use crate::{
    AppCommand, AppError, AppResult,
    app_command::USAGE,
    autosave::{self, AutosaveRequest},
    display,
    exporter::CsvExporter,
    store::{ShootDayId, ShootDayRepository},
};

use std::{fs, panic::Location, sync::Arc, time::Duration};

use clapper_log_core::{Clock, SceneId, ShootDay, ShootDaySnapshot};
use error_location::ErrorLocation;
use tokio::{
    sync::{Mutex, mpsc, watch},
    time::{self, MissedTickBehavior},
};
use tracing::{debug, error, info, instrument, warn};

/// Main application state.
///
/// Owns the active shoot day and processes one operator command at a time.
/// Every applied transition is forwarded to the autosave task through the
/// day's change listener.
pub struct App {
    pub(crate) day: ShootDay,
    pub(crate) day_id: ShootDayId,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) repository: Arc<Mutex<ShootDayRepository>>,
    pub(crate) autosave_tx: mpsc::UnboundedSender<AutosaveRequest>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
    pub(crate) exporter: CsvExporter,
    pub(crate) tick_interval: Duration,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self), fields(day = %self.day_id))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("ClapperLog starting");

        self.install_listener();
        println!("Shoot day {}. Type 'help' for commands.", self.day_id);
        println!("{}", display::status_line(&self.day));

        let mut ticker = time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                command = self.command_rx.recv() => {
                    match command {
                        Some(AppCommand::Shutdown) => {
                            info!("Shutdown requested");
                            break;
                        }
                        Some(command) => {
                            if let Err(e) = self.handle_command(command).await {
                                self.report(&e);
                            }
                        }
                        None => {
                            info!("Command channel closed, shutting down");
                            break;
                        }
                    }
                }

                // Display only; elapsed time is recomputed from stored instants.
                _ = ticker.tick(), if self.day.is_timing() => {
                    println!("{}", display::status_line(&self.day));
                }
            }
        }

        autosave::flush(&self.autosave_tx).await;
        let _ = self.shutdown_tx.send(true);
        info!("ClapperLog shut down successfully");

        Ok(())
    }

    /// Route every change of the active day to the autosave task.
    pub(crate) fn install_listener(&mut self) {
        let day = self.day_id.clone();
        let autosave_tx = self.autosave_tx.clone();

        self.day.set_listener(move |snapshot: &ShootDaySnapshot| {
            let request = AutosaveRequest::Save {
                day: day.clone(),
                snapshot: snapshot.clone(),
            };
            if autosave_tx.send(request).is_err() {
                warn!(day = %day, "Autosave task stopped, change not persisted");
            }
        });
    }

    /// Apply one operator command.
    #[instrument(skip(self))]
    pub(crate) async fn handle_command(&mut self, command: AppCommand) -> AppResult<()> {
        match command {
            AppCommand::Select(scene) => {
                self.day.select_scene(SceneId::new(scene))?;
                self.print_status();
            }
            AppCommand::StartSetup => {
                self.day.start_setup()?;
                self.print_status();
            }
            AppCommand::StartRecording => {
                let session_id = self.day.start_recording()?;
                debug!(session_id = %session_id, day = %self.day_id, "Take started");
                self.print_status();
            }
            AppCommand::Pause => {
                self.day.pause_recording()?;
                self.print_status();
            }
            AppCommand::Resume => {
                self.day.resume_recording()?;
                self.print_status();
            }
            AppCommand::Stop => {
                let record = self.day.stop_recording()?;
                let notes = if record.notes.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", record.notes)
                };
                println!("Logged {} {}{}", record.scene, record.duration, notes);
            }
            AppCommand::AddRange(end) => {
                self.day.add_range(end)?;
                println!("{} scene(s) in the pool.", self.day.pool().len());
            }
            AppCommand::AddCustom(name) => {
                self.day.add_custom(&name)?;
                println!("{} scene(s) in the pool.", self.day.pool().len());
            }
            AppCommand::ToggleThumbnail => {
                let on = self.day.toggle_thumbnail();
                println!("Thumbnail {}.", if on { "added" } else { "removed" });
            }
            AppCommand::ToggleMonologue(name) => {
                let on = self.day.toggle_monologue(name.as_deref());
                println!("Monologue {}.", if on { "on" } else { "off" });
            }
            AppCommand::RenameMonologue(name) => {
                self.day.rename_monologue(name.as_deref())?;
                if let Some(scene) = self.day.pool().monologue_scene() {
                    println!("Monologue is now {scene}.");
                }
            }
            AppCommand::Import(path) => {
                let text = fs::read_to_string(&path).map_err(|e| AppError::IoError {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                })?;
                let imported = self.day.import_scenes(&text)?;
                println!("Imported {imported} scene(s) from {}.", path.display());
            }
            AppCommand::Delete(index) => match self.day.delete_record(index) {
                Some(record) => println!("Deleted record {} ({}).", index + 1, record.scene),
                None => println!("No record {}.", index + 1),
            },
            AppCommand::ListScenes => println!("{}", display::scene_listing(self.day.pool())),
            AppCommand::ListRecords => println!("{}", display::record_listing(self.day.records())),
            AppCommand::Status => self.print_status(),
            AppCommand::Export => {
                let path = self.exporter.export(&self.day)?;
                println!("Exported to {}.", path.display());
            }
            AppCommand::ListDays => self.list_days().await?,
            AppCommand::SwitchDay(raw) => self.switch_day(&raw).await?,
            AppCommand::RenameDay(raw) => self.rename_day(&raw).await?,
            AppCommand::Reset => {
                self.day.reset();
                println!("Shoot day {} cleared.", self.day_id);
            }
            AppCommand::Help => println!("{USAGE}"),
            AppCommand::Shutdown => {}
        }

        Ok(())
    }

    async fn list_days(&self) -> AppResult<()> {
        self.ensure_multi_day().await?;
        let days = self.repository.lock().await.list_days()?;
        println!("{}", display::day_listing(&days, &self.day_id));
        Ok(())
    }

    /// Persist the active day, then load `raw` in its place.
    ///
    /// Nothing changes in memory unless both the save and the load succeed.
    #[instrument(skip(self))]
    async fn switch_day(&mut self, raw: &str) -> AppResult<()> {
        self.ensure_multi_day().await?;
        let next = ShootDayId::parse(raw)?;
        if next == self.day_id {
            println!("Already on {next}.");
            return Ok(());
        }

        autosave::flush(&self.autosave_tx).await;

        let snapshot = {
            let mut repository = self.repository.lock().await;
            repository.save(&self.day_id, &self.day.snapshot())?;
            let snapshot = repository.load(&next)?;
            if let Err(e) = repository.set_active_day(&next) {
                warn!(day = %next, error = %e, "Failed to remember active day");
            }
            snapshot
        };

        let options = self.day.options();
        let previous = std::mem::replace(&mut self.day_id, next);
        self.day = ShootDay::restore(snapshot, Arc::clone(&self.clock), options);
        self.install_listener();

        info!(from = %previous, to = %self.day_id, "Shoot day switched");
        println!("Switched to {}.", self.day_id);
        self.print_status();

        Ok(())
    }

    /// Move the active day's stored state under a new name.
    #[instrument(skip(self))]
    async fn rename_day(&mut self, raw: &str) -> AppResult<()> {
        self.ensure_multi_day().await?;
        let renamed = ShootDayId::parse(raw)?;
        if renamed == self.day_id {
            println!("Already named {renamed}.");
            return Ok(());
        }

        autosave::flush(&self.autosave_tx).await;

        {
            let mut repository = self.repository.lock().await;
            repository.save(&self.day_id, &self.day.snapshot())?;
            repository.rename_day(&self.day_id, &renamed)?;
            if let Err(e) = repository.set_active_day(&renamed) {
                warn!(day = %renamed, error = %e, "Failed to remember active day");
            }
        }

        let previous = std::mem::replace(&mut self.day_id, renamed);
        self.install_listener();

        println!("Renamed {previous} to {}.", self.day_id);

        Ok(())
    }

    async fn ensure_multi_day(&self) -> AppResult<()> {
        if self.repository.lock().await.is_multi_day() {
            return Ok(());
        }
        Err(AppError::InvalidCommand {
            reason: "shoot days are disabled (storage.multi_day = false)".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn report(&self, error: &AppError) {
        match error.as_core() {
            Some(core) if core.is_invalid_transition() => {
                debug!(error = %core, "Command ignored");
            }
            Some(core) => warn!(error = %core, "Command rejected"),
            None => error!(error = %error, "Command failed"),
        }
        println!("{}", display::operator_message(error));
    }

    fn print_status(&self) {
        println!("{}", display::status_line(&self.day));
    }
}
