//! Dispatcher for middleware action dispatch
//!
//! Middleware and background tasks use the Dispatcher to send actions back
//! into the store. The store drains them on the main thread, after the
//! action currently being processed has been reduced.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
///
/// Cheap to clone; background tasks keep their own copy.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the store
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
