//! Outbound update queue
//!
//! Local state changes are applied optimistically by the application and
//! handed to this queue for delivery. A single worker sends them in order,
//! retrying failures that are safe to repeat with exponential backoff.
//! Updates that still fail are dropped with a warning; the next refresh reconciles state.

use crate::client::NotificationBackend;
use crate::error::BackendError;
use crate::types::ThreadUpdate;
use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Retry policy for outbound updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncPolicy {
    /// Total attempts per update, including the first one
    pub max_attempts: u32,

    /// Delay before the first retry; doubles on every further retry
    pub base_delay: Duration,
}

impl Default for SyncPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

impl SyncPolicy {
    /// Delay before retry number `retry` (1-based)
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 1u32.checked_shl(retry.saturating_sub(1)).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }
}

/// Delivery counters reported when the worker exits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub delivered: usize,
    pub dropped: usize,
}

/// Handle to the update worker
///
/// Cloning is cheap. The worker stops once every handle has been dropped and
/// the remaining updates have been processed.
#[derive(Debug, Clone)]
pub struct SyncQueue {
    tx: mpsc::UnboundedSender<ThreadUpdate>,
}

impl SyncQueue {
    /// Start the worker on the given runtime
    pub fn spawn(
        handle: &Handle,
        backend: Arc<dyn NotificationBackend>,
        policy: SyncPolicy,
    ) -> (Self, JoinHandle<SyncStats>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = handle.spawn(run_worker(rx, backend, policy));
        (Self { tx }, worker)
    }

    /// Queue an update for delivery
    ///
    /// Returns `false` if the worker is gone.
    pub fn enqueue(&self, update: ThreadUpdate) -> bool {
        match self.tx.send(update) {
            Ok(()) => true,
            Err(e) => {
                warn!("Sync worker stopped, discarding {:?}", e.0);
                false
            }
        }
    }
}

async fn run_worker(
    mut rx: mpsc::UnboundedReceiver<ThreadUpdate>,
    backend: Arc<dyn NotificationBackend>,
    policy: SyncPolicy,
) -> SyncStats {
    let mut stats = SyncStats::default();

    while let Some(update) = rx.recv().await {
        if deliver(backend.as_ref(), update, &policy).await {
            stats.delivered += 1;
        } else {
            stats.dropped += 1;
        }
    }

    debug!(
        "Sync worker finished: {} delivered, {} dropped",
        stats.delivered, stats.dropped
    );
    stats
}

/// Toggles are not idempotent: resending one the backend may already have
/// applied would flip it back, so they are only retried when the request
/// never left this process.
fn may_retry(update: ThreadUpdate, error: &BackendError) -> bool {
    if update.action.is_idempotent() {
        error.is_retryable()
    } else {
        error.is_retryable() && error.never_sent()
    }
}

async fn deliver(backend: &dyn NotificationBackend, update: ThreadUpdate, policy: &SyncPolicy) -> bool {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match backend.update_thread(update).await {
            Ok(()) => {
                debug!(
                    "Delivered {:?} for thread {} (attempt {})",
                    update.action, update.thread_id, attempt
                );
                return true;
            }
            Err(e) if attempt < max_attempts && may_retry(update, &e) => {
                let delay = policy.backoff(attempt);
                debug!(
                    "Update for thread {} failed ({}), retrying in {:?}",
                    update.thread_id, e, delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                warn!(
                    "Dropping {:?} for thread {} after {} attempt(s): {}",
                    update.action, update.thread_id, attempt, e
                );
                return false;
            }
        }
    }
}
