//! ClapperLog: terminal shoot logger for scene setup and take timing.

mod app;
mod app_command;
mod autosave;
mod command_reader;
mod config;
mod display;
mod error;
mod exporter;
mod store;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    command_reader::CommandReader,
    error::{AppError, Result as AppResult},
};

use crate::{
    autosave::Autosaver,
    config::Config,
    exporter::CsvExporter,
    store::{FileStore, ShootDayId, ShootDayRepository},
};

use std::{sync::Arc, time::Duration};

use clapper_log_core::{Clock, ShootDay, ShootDaySnapshot, SystemClock};
use tokio::sync::{Mutex, mpsc, watch};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "clapper_log=info,clapper_log_core=info";

/// Application entry point.
fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let store = match config.store_path().and_then(|path| FileStore::open(&path)) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open store: {:?}", e);
            std::process::exit(1);
        }
    };

    let exporter = match CsvExporter::from_config(&config) {
        Ok(exporter) => exporter,
        Err(e) => {
            error!("Failed to resolve export directory: {:?}", e);
            std::process::exit(1);
        }
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let mut repository = ShootDayRepository::new(
        Box::new(store),
        config.session.user_id.trim(),
        config.storage.multi_day,
    );

    let day_id = match active_day(&mut repository, clock.as_ref()) {
        Ok(day_id) => day_id,
        Err(e) => {
            error!("Failed to determine shoot day: {:?}", e);
            std::process::exit(1);
        }
    };

    // A day that cannot be read starts empty; the operator is told why.
    let snapshot = match repository.load(&day_id) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!(day = %day_id, error = %e, "Failed to load shoot day");
            println!("Could not load shoot day {day_id}: {e}. Starting empty.");
            ShootDaySnapshot::default()
        }
    };

    let day = ShootDay::restore(snapshot, Arc::clone(&clock), config.shoot_day_options());
    let repository = Arc::new(Mutex::new(repository));

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    rt.block_on(async {
        let (command_tx, command_rx) = mpsc::channel(32);
        let (autosave_tx, autosave_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let autosave_handle =
            Autosaver::new(config.debounce(), Arc::clone(&repository)).spawn(autosave_rx);
        let command_reader = CommandReader::new(command_tx);

        let app = App {
            day,
            day_id,
            clock,
            repository,
            autosave_tx,
            command_rx,
            shutdown_tx,
            exporter,
            tick_interval: config.tick_interval(),
        };

        tokio::join!(
            async {
                if let Err(e) = command_reader.run_stdin(shutdown_rx).await {
                    error!(error = ?e, "Command reader error");
                }
            },
            async {
                if let Err(e) = app.run().await {
                    error!(error = ?e, "App error");
                }
            }
        );

        // App dropped its sender; the task drains and exits.
        match tokio::time::timeout(Duration::from_secs(1), autosave_handle).await {
            Ok(Ok(())) => info!("Autosave stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Autosave task panicked"),
            Err(_) => warn!("Autosave did not stop within timeout"),
        }
    });

    // Stdin reads block a runtime thread until the next line arrives.
    rt.shutdown_timeout(Duration::from_millis(100));
}

/// The stored active day, or today's date for a first run.
fn active_day(repository: &mut ShootDayRepository, clock: &dyn Clock) -> AppResult<ShootDayId> {
    if let Some(day) = repository.active_day()? {
        info!(day = %day, "Resuming shoot day");
        return Ok(day);
    }

    let today = ShootDayId::parse(&clock.date_label(clock.now_millis()))?;
    if let Err(e) = repository.set_active_day(&today) {
        warn!(day = %today, error = %e, "Failed to remember active day");
    }
    info!(day = %today, "Starting new shoot day");
    Ok(today)
}
