use crate::actions::{Action, InboxAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        // Payloads can be large; log their size only
        match action {
            Action::Inbox(InboxAction::Loaded(items)) => {
                log::debug!("Action: Inbox(Loaded({} items))", items.len());
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
