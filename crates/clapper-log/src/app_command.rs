use crate::{AppError, AppResult};

use std::{panic::Location, path::PathBuf, str::FromStr};

use error_location::ErrorLocation;

/// Operator commands, one per input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Pick the scene for the next take.
    Select(String),
    /// Start the setup timer for the selected scene.
    StartSetup,
    /// Start recording the selected scene.
    StartRecording,
    /// Pause the running take.
    Pause,
    /// Resume the paused take.
    Resume,
    /// Stop the take and log it.
    Stop,
    /// Append `s01..sNN`.
    AddRange(u32),
    /// Append a custom scene.
    AddCustom(String),
    /// Toggle the thumbnail entry.
    ToggleThumbnail,
    /// Toggle the monologue entry, optionally naming the performer.
    ToggleMonologue(Option<String>),
    /// Rename the monologue entry.
    RenameMonologue(Option<String>),
    /// Import a scene list from a text file.
    Import(PathBuf),
    /// Delete a logged record by its zero-based index.
    Delete(usize),
    /// List the scene pool.
    ListScenes,
    /// List logged records.
    ListRecords,
    /// Show the current state.
    Status,
    /// Write the CSV export.
    Export,
    /// List known shoot days.
    ListDays,
    /// Switch to another shoot day.
    SwitchDay(String),
    /// Rename the active shoot day.
    RenameDay(String),
    /// Clear the active shoot day.
    Reset,
    /// Print usage.
    Help,
    /// Request application shutdown.
    Shutdown,
}

/// Usage text printed by `help` and after unknown input.
pub const USAGE: &str = "\
Commands:
  select <scene>           pick the scene for the next take
  setup                    start the setup timer
  start | pause | resume | stop
  range <n>                add s01..sNN (1-99)
  add <name>               add a custom scene
  thumbnail                toggle the thumbnail scene
  monologue [name]         toggle the monologue scene
  rename-monologue [name]  rename the monologue scene
  import <file>            add scenes from a text file
  delete <n>               delete record n (as listed)
  scenes | records | status
  export                   write the CSV export
  days | day <id> | rename-day <id>
  reset                    clear the active shoot day
  help | quit";

impl FromStr for AppCommand {
    type Err = AppError;

    #[track_caller]
    fn from_str(line: &str) -> AppResult<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let argument = (!rest.is_empty()).then(|| rest.to_string());

        let command = match verb.to_ascii_lowercase().as_str() {
            "select" => AppCommand::Select(required(argument, "select <scene>")?),
            "setup" => AppCommand::StartSetup,
            "start" => AppCommand::StartRecording,
            "pause" => AppCommand::Pause,
            "resume" => AppCommand::Resume,
            "stop" => AppCommand::Stop,
            "range" => {
                let raw = required(argument, "range <n>")?;
                let end = raw.parse::<u32>().map_err(|_| AppError::InvalidCommand {
                    reason: format!("range expects a number, got {raw:?}"),
                    location: ErrorLocation::from(Location::caller()),
                })?;
                AppCommand::AddRange(end)
            }
            "add" => AppCommand::AddCustom(required(argument, "add <name>")?),
            "thumbnail" => AppCommand::ToggleThumbnail,
            "monologue" => AppCommand::ToggleMonologue(argument),
            "rename-monologue" => AppCommand::RenameMonologue(argument),
            "import" => AppCommand::Import(PathBuf::from(required(argument, "import <file>")?)),
            "delete" => {
                let raw = required(argument, "delete <n>")?;
                match raw.parse::<usize>() {
                    Ok(position) if position >= 1 => AppCommand::Delete(position - 1),
                    _ => {
                        return Err(AppError::InvalidCommand {
                            reason: format!("delete expects a record number from 1, got {raw:?}"),
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                }
            }
            "scenes" => AppCommand::ListScenes,
            "records" => AppCommand::ListRecords,
            "status" => AppCommand::Status,
            "export" => AppCommand::Export,
            "days" => AppCommand::ListDays,
            "day" => AppCommand::SwitchDay(required(argument, "day <id>")?),
            "rename-day" => AppCommand::RenameDay(required(argument, "rename-day <id>")?),
            "reset" => AppCommand::Reset,
            "help" | "?" => AppCommand::Help,
            "quit" | "exit" => AppCommand::Shutdown,
            _ => {
                return Err(AppError::InvalidCommand {
                    reason: format!("unknown command {verb:?}"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(command)
    }
}

#[track_caller]
fn required(argument: Option<String>, usage: &str) -> AppResult<String> {
    argument.ok_or_else(|| AppError::InvalidCommand {
        reason: format!("usage: {usage}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
