//! Debounced catalog re-fetching
//!
//! Collapses bursts of filter changes into one request. Callers push every
//! change through [`FirmwareWatcher::update`]; a single worker task waits
//! for the window to pass without a newer change, fetches once for the
//! newest state, and delivers the result on the paired receiver.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::client::{Backend, FetchError};
use crate::config;
use crate::firmware::{FirmwareResponse, FirmwareService};
use crate::log_debug;
use crate::query::FirmwareFilters;

const MODULE: &str = "watch";

/// Handle for pushing filter changes to the debounce worker.
///
/// Cloning shares the same worker. Dropping every handle lets the worker
/// fetch the last pending state, deliver it, and exit.
#[derive(Debug, Clone)]
pub struct FirmwareWatcher {
    updates: mpsc::UnboundedSender<FirmwareFilters>,
}

impl FirmwareWatcher {
    /// Spawn the worker task and return the update handle plus the result
    /// stream. Requires a running tokio runtime.
    pub fn spawn<B>(
        service: Arc<FirmwareService<B>>,
        window: Duration,
    ) -> (
        Self,
        mpsc::UnboundedReceiver<Result<FirmwareResponse, FetchError>>,
    )
    where
        B: Backend + 'static,
    {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let (result_tx, result_rx) = mpsc::unbounded_channel();

        tokio::spawn(run_worker(service, window, update_rx, result_tx));

        (Self { updates: update_tx }, result_rx)
    }

    /// The configured debounce window
    pub fn default_window() -> Duration {
        Duration::from_millis(config::query::DEBOUNCE_WINDOW_MS)
    }

    /// Record a filter change. Only the newest state at the end of a quiet
    /// window is fetched; intermediate states are discarded unseen.
    pub fn update(&self, filters: FirmwareFilters) {
        // The worker only exits once all handles are gone, so a send can
        // only fail when there is nobody left to notify.
        let _ = self.updates.send(filters);
    }
}

async fn run_worker<B: Backend + 'static>(
    service: Arc<FirmwareService<B>>,
    window: Duration,
    mut updates: mpsc::UnboundedReceiver<FirmwareFilters>,
    results: mpsc::UnboundedSender<Result<FirmwareResponse, FetchError>>,
) {
    log_debug!(
        MODULE,
        "Debounce worker started ({}ms window)",
        window.as_millis()
    );

    while let Some(mut pending) = updates.recv().await {
        // Quiescence wait: every newer state replaces the pending one and
        // restarts the window.
        loop {
            tokio::select! {
                update = updates.recv() => match update {
                    Some(filters) => pending = filters,
                    // All handles dropped; still flush the pending state
                    None => break,
                },
                _ = sleep(window) => break,
            }
        }

        let result = service.fetch_firmware(&pending, &[]).await;
        if results.send(result).is_err() {
            // Receiver gone, nobody is listening anymore
            break;
        }
    }

    log_debug!(MODULE, "Debounce worker stopped");
}
