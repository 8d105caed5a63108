use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver};

/// Store - holds application state and manages the Redux loop
///
/// The store is the only writer of `AppState`. Actions dispatched by
/// middleware or background tasks wait in a channel until the store drains
/// it.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    pending: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, pending) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }

        // Process any actions dispatched meanwhile
        self.process_pending();
    }

    /// Dispatch everything that arrived from middleware or background tasks
    pub fn process_pending(&mut self) {
        while let Ok(action) = self.pending.try_recv() {
            self.dispatch(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{GlobalAction, InboxAction};
    use crate::state::AppState;

    /// Records every action it sees and consumes the ones matching `consume`
    struct Recorder {
        seen: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
        consume: fn(&Action) -> bool,
    }

    impl Middleware for Recorder {
        fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
            self.seen.lock().unwrap().push(format!("{:?}", action));
            !(self.consume)(action)
        }
    }

    #[test]
    fn test_consumed_action_skips_reducer() {
        let seen = Default::default();
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(Recorder {
            seen: std::sync::Arc::clone(&seen),
            consume: |a| matches!(a, Action::Global(GlobalAction::Quit)),
        }));

        store.dispatch(Action::Global(GlobalAction::Quit));
        assert!(store.state().running);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_pending_actions_are_drained() {
        let mut store = Store::new(AppState::default());
        store
            .dispatcher
            .clone()
            .dispatch(Action::Inbox(InboxAction::Refresh));

        store.process_pending();
        assert_eq!(store.state().inbox.repository.in_flight(), 1);
    }
}
