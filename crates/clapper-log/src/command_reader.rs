//! Line-oriented operator input.
//!
//! Reads commands from stdin (or any buffered reader) and forwards them to
//! the app. Unknown input is answered with usage text and never reaches the
//! app. End of input is treated as `quit`.

use crate::{AppCommand, AppError, AppResult, app_command::USAGE, display};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    sync::{mpsc, watch},
};
use tracing::{debug, info, instrument};

/// Parses input lines into [`AppCommand`]s.
pub struct CommandReader {
    command_tx: mpsc::Sender<AppCommand>,
}

impl CommandReader {
    /// Reader sending commands on `command_tx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self { command_tx }
    }

    /// Read stdin until end of input or shutdown.
    pub async fn run_stdin(&self, shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        self.run(BufReader::new(tokio::io::stdin()), shutdown_rx).await
    }

    /// Read `input` until end of input or shutdown.
    #[instrument(skip_all)]
    pub async fn run<R>(&self, input: R, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Command reader shutting down");
                    break;
                }
                line = lines.next_line() => {
                    match line? {
                        Some(line) => self.handle_line(&line).await?,
                        None => {
                            info!("End of input, requesting shutdown");
                            self.send(AppCommand::Shutdown).await?;
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    async fn handle_line(&self, line: &str) -> AppResult<()> {
        if line.trim().is_empty() {
            return Ok(());
        }

        match line.parse::<AppCommand>() {
            Ok(AppCommand::Help) => println!("{USAGE}"),
            Ok(command) => self.send(command).await?,
            Err(e) => {
                debug!(line, error = %e, "Unrecognised input");
                println!("{}", display::operator_message(&e));
                println!("Type 'help' for the list of commands.");
            }
        }

        Ok(())
    }

    async fn send(&self, command: AppCommand) -> AppResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send {:?}: {}", e.0, e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
