//! Text rendering for the operator terminal.

use crate::{AppError, store::ShootDayId};

use std::fmt::Write;

use clapper_log_core::{RecordLog, RecordingState, ScenePool, ShootDay, ShootError, format_duration};

/// One-line summary of what the day is doing right now.
pub fn status_line(day: &ShootDay) -> String {
    match (day.recording_state(), day.current()) {
        (RecordingState::Idle, _) | (_, None) => {
            let selected = day
                .selected_scene()
                .map_or_else(|| "-".to_string(), ToString::to_string);
            if day.is_setting_up() {
                format!(
                    "[setup] {selected}  {}",
                    format_duration(day.setup_elapsed())
                )
            } else {
                format!(
                    "[idle] selected: {selected}  scenes left: {}  takes: {}",
                    day.pool().len(),
                    day.records().len()
                )
            }
        }
        (state, Some(session)) => format!(
            "[{state}] {}  {}  started {}",
            session.scene(),
            format_duration(day.current_elapsed()),
            session.start_clock()
        ),
    }
}

/// Numbered scene pool, with the special-scene flags.
pub fn scene_listing(pool: &ScenePool) -> String {
    if pool.is_empty() {
        return "No scenes. Use 'range <n>', 'add <name>' or 'import <file>'.".to_string();
    }

    let mut out = String::new();
    for scene in pool.scenes() {
        let _ = writeln!(out, "  {scene}");
    }
    let _ = write!(
        out,
        "{} scene(s); thumbnail {}, monologue {}",
        pool.len(),
        on_off(pool.has_thumbnail()),
        on_off(pool.is_monologue_on())
    );
    out
}

/// Logged takes, numbered from 1 as `delete` expects.
pub fn record_listing(records: &RecordLog) -> String {
    if records.is_empty() {
        return "No records yet.".to_string();
    }

    let mut out = String::new();
    for (index, record) in records.records().iter().enumerate() {
        let setup = record.setup_duration.as_deref().unwrap_or("-");
        let _ = write!(
            out,
            "{:>3}. {}  {}-{}  {}  setup {}",
            index + 1,
            record.scene,
            record.start_time,
            record.end_time,
            record.duration,
            setup
        );
        if !record.notes.is_empty() {
            let _ = write!(out, "  ({})", record.notes);
        }
        out.push('\n');
    }
    out.truncate(out.trim_end().len());
    out
}

/// Known days, marking the active one. The active day is listed even before
/// anything has been stored for it.
pub fn day_listing(days: &[ShootDayId], active: &ShootDayId) -> String {
    let mut out = String::new();
    if !days.contains(active) {
        let _ = writeln!(out, "* {active}");
    }
    for day in days {
        let marker = if day == active { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {day}");
    }
    out.truncate(out.trim_end().len());
    out
}

/// Short message for the operator, without source locations.
pub fn operator_message(error: &AppError) -> String {
    match error {
        AppError::Core { source, .. } => match source {
            ShootError::InvalidTransition { action, state, .. } => {
                format!("Ignored: cannot {action} while {state}.")
            }
            ShootError::Validation { reason, .. } => format!("Rejected: {reason}."),
            ShootError::NothingToExport { .. } => "No records to export.".to_string(),
        },
        AppError::InvalidCommand { reason, .. } => format!("Invalid command: {reason}."),
        other => format!("Error: {other}"),
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}
