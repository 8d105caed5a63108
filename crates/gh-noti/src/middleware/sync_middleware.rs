use crate::actions::{Action, SyncAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use gh_noti_client::SyncQueue;

/// Hands queued thread updates to the background delivery worker
pub struct SyncMiddleware {
    queue: SyncQueue,
}

impl SyncMiddleware {
    pub fn new(queue: SyncQueue) -> Self {
        Self { queue }
    }
}

impl Middleware for SyncMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Sync(SyncAction::Enqueue(update)) => {
                log::debug!(
                    "SyncMiddleware: queueing {:?} for thread {}",
                    update.action,
                    update.thread_id
                );
                self.queue.enqueue(*update);
                false
            }
            _ => true,
        }
    }
}
