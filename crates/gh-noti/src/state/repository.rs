//! Notification repository
//!
//! Canonical in-memory list of inbox items. Every change swaps in a new
//! immutable snapshot, so a snapshot handed out earlier never changes.

use crate::domain_models::{LoadingState, Notification};
use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct NotificationRepository {
    items: Arc<[Notification]>,
    loading_state: LoadingState,
    last_updated: Option<DateTime<Local>>,
    /// Fetches started but not yet answered
    in_flight: usize,
    /// At least one fetch has been answered, successfully or not
    settled: bool,
}

impl Default for NotificationRepository {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
            loading_state: LoadingState::Idle,
            last_updated: None,
            in_flight: 0,
            settled: false,
        }
    }
}

impl NotificationRepository {
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn loading_state(&self) -> &LoadingState {
        &self.loading_state
    }

    /// Time of the last successful refresh
    pub fn last_updated(&self) -> Option<&DateTime<Local>> {
        self.last_updated.as_ref()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Whether any fetch has completed yet
    pub fn has_settled(&self) -> bool {
        self.settled
    }

    /// A fetch was started
    pub fn begin_fetch(&mut self) {
        self.in_flight += 1;
        self.loading_state = LoadingState::Loading;
    }

    /// Replace the whole list with a fetched payload
    ///
    /// Order is kept. Should the payload repeat an id, the first occurrence
    /// wins.
    pub fn replace(&mut self, items: Vec<Notification>) {
        let mut seen = HashSet::with_capacity(items.len());
        let items: Vec<Notification> = items
            .into_iter()
            .filter(|n| {
                let first = seen.insert(n.id);
                if !first {
                    log::warn!("Dropping duplicate notification id {} from payload", n.id);
                }
                first
            })
            .collect();

        log::info!("Inbox refreshed: {} notifications", items.len());
        self.items = Arc::from(items);
        self.last_updated = Some(Local::now());
        self.finish_fetch(LoadingState::Loaded);
    }

    /// A fetch failed; the current list stays as it is
    pub fn fail_fetch(&mut self, message: impl Into<String>) {
        self.finish_fetch(LoadingState::Error(message.into()));
    }

    fn finish_fetch(&mut self, outcome: LoadingState) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.settled = true;
        self.loading_state = if self.in_flight > 0 {
            LoadingState::Loading
        } else {
            outcome
        };
    }

    /// Flip `pinned`. Returns `false` if `id` is unknown.
    pub fn toggle_pin(&mut self, id: i64) -> bool {
        self.update(id, |n| {
            n.pinned = !n.pinned;
            true
        })
    }

    /// Flip `unread`. Returns `false` if `id` is unknown.
    pub fn toggle_read(&mut self, id: i64) -> bool {
        self.update(id, |n| {
            n.unread = !n.unread;
            true
        })
    }

    /// Force `unread` off. Returns whether anything changed.
    pub fn mark_read(&mut self, id: i64) -> bool {
        self.update(id, |n| std::mem::replace(&mut n.unread, false))
    }

    /// Apply `change` to a copy of the item and publish a new snapshot if it
    /// reports a change
    fn update<F>(&mut self, id: i64, change: F) -> bool
    where
        F: FnOnce(&mut Notification) -> bool,
    {
        let Some(index) = self.items.iter().position(|n| n.id == id) else {
            log::debug!("Notification {} not found, ignoring", id);
            return false;
        };

        let mut items = self.items.to_vec();
        let changed = change(&mut items[index]);
        if changed {
            self.items = Arc::from(items);
        }
        changed
    }
}

#[cfg(test)]
impl NotificationRepository {
    /// Shared handle to the current snapshot
    pub fn snapshot(&self) -> Arc<[Notification]> {
        Arc::clone(&self.items)
    }
}
