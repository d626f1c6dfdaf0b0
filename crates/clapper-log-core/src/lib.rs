//! ClapperLog Core Library
//!
//! Shoot-day state for a film set: the pool of scenes still to shoot, a
//! setup/recording timer that survives pauses and restarts, and the log of
//! completed takes with CSV export.
//!
//! # Example
//!
//! ```no_run
//! use clapper_log_core::{CoreResult, SceneId, ShootDay, ShootDayOptions, SystemClock};
//!
//! use std::{sync::Arc, thread::sleep, time::Duration};
//!
//! fn main() -> CoreResult<()> {
//!     let mut day = ShootDay::new(Arc::new(SystemClock), ShootDayOptions::default());
//!
//!     day.add_range(10)?;
//!     day.select_scene(SceneId::sequential(1))?;
//!     day.start_setup()?;
//!     sleep(Duration::from_secs(5));
//!     day.start_recording()?;
//!     sleep(Duration::from_secs(3));
//!     let record = day.stop_recording()?;
//!
//!     println!("{} took {}", record.scene, record.duration);
//!     println!("{}", day.export_csv()?);
//!     Ok(())
//! }
//! ```

mod clock;
mod duration;
mod error;
mod record;
mod scene;
mod shoot_day;
mod timer;

pub use {
    clock::{Clock, ManualClock, SystemClock},
    duration::{clamp_elapsed, format_duration},
    error::{Result as CoreResult, ShootError},
    record::{Record, RecordLog, UTF8_BOM},
    scene::{
        ImportedScene, MAX_SEQUENTIAL_SCENE, MONOLOGUE_MARKER, SceneId, ScenePool, THUMBNAIL,
        parse_scene_list,
    },
    shoot_day::{ChangeListener, ShootDay, ShootDayOptions, ShootDaySnapshot},
    timer::{INTERRUPTED_NOTE, RecordingSession, RecordingState, SetupTimer},
};
