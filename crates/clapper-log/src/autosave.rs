//! Debounced persistence of shoot-day snapshots.
//!
//! The core hands out one snapshot per applied transition. Writing each one
//! straight to disk would rewrite the store several times for a single burst
//! of operator input, so snapshots are sent here and only the latest one per
//! debounce window is saved.

use crate::store::{ShootDayId, ShootDayRepository};

use std::{sync::Arc, time::Duration};

use clapper_log_core::ShootDaySnapshot;
use tokio::{
    sync::{Mutex, mpsc, oneshot},
    task::JoinHandle,
};
use tracing::{debug, error, info, instrument};

/// Requests accepted by the autosave task.
#[derive(Debug)]
pub enum AutosaveRequest {
    /// Persist this snapshot of `day`, replacing any pending one.
    Save {
        /// Day the snapshot belongs to.
        day: ShootDayId,
        /// State to persist.
        snapshot: ShootDaySnapshot,
    },
    /// Write whatever is pending now and acknowledge.
    Flush {
        /// Signalled once the pending write has been attempted.
        done: oneshot::Sender<()>,
    },
}

/// Background writer coalescing snapshots within a debounce window.
pub struct Autosaver {
    debounce: Duration,
    repository: Arc<Mutex<ShootDayRepository>>,
}

impl Autosaver {
    /// Writer saving through `repository`.
    pub fn new(debounce: Duration, repository: Arc<Mutex<ShootDayRepository>>) -> Self {
        Self {
            debounce,
            repository,
        }
    }

    /// Run on the current runtime until every sender is dropped.
    pub fn spawn(self, request_rx: mpsc::UnboundedReceiver<AutosaveRequest>) -> JoinHandle<()> {
        tokio::spawn(self.run(request_rx))
    }

    #[instrument(skip_all, fields(debounce_ms = self.debounce.as_millis() as u64))]
    async fn run(self, mut request_rx: mpsc::UnboundedReceiver<AutosaveRequest>) {
        let mut pending: Option<(ShootDayId, ShootDaySnapshot)> = None;

        loop {
            let request = if pending.is_some() {
                match tokio::time::timeout(self.debounce, request_rx.recv()).await {
                    Ok(request) => request,
                    Err(_) => {
                        self.write(&mut pending).await;
                        continue;
                    }
                }
            } else {
                request_rx.recv().await
            };

            match request {
                Some(AutosaveRequest::Save { day, snapshot }) => {
                    if let Some((pending_day, _)) = &pending
                        && *pending_day != day
                    {
                        self.write(&mut pending).await;
                    }
                    pending = Some((day, snapshot));
                }
                Some(AutosaveRequest::Flush { done }) => {
                    self.write(&mut pending).await;
                    let _ = done.send(());
                }
                None => {
                    self.write(&mut pending).await;
                    info!("Autosave stopped");
                    break;
                }
            }
        }
    }

    /// A failed write is dropped; the next snapshot carries the same state.
    async fn write(&self, pending: &mut Option<(ShootDayId, ShootDaySnapshot)>) {
        let Some((day, snapshot)) = pending.take() else {
            return;
        };

        let mut repository = self.repository.lock().await;
        match repository.save(&day, &snapshot) {
            Ok(()) => debug!(day = %day, "Autosaved"),
            Err(e) => error!(day = %day, error = %e, "Autosave failed"),
        }
    }
}

/// Ask the autosave task to write what it holds and wait until it has.
///
/// Returns immediately if the task is gone.
pub async fn flush(request_tx: &mpsc::UnboundedSender<AutosaveRequest>) {
    let (done, done_rx) = oneshot::channel();
    if request_tx.send(AutosaveRequest::Flush { done }).is_err() {
        debug!("Autosave task already stopped, nothing to flush");
        return;
    }
    let _ = done_rx.await;
}
