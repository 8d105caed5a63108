//! KeyboardMiddleware - translates raw key presses into actions
//!
//! ## Layer 1: Priority Keys
//! Ctrl+C and Esc work regardless of the active view.
//!
//! ## Layer 2: Active View
//! Every other key is offered to the view on top of the stack. Views only
//! translate keys that make sense for them, so nothing leaks to a view that
//! is covered by a floating one.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        // Layer 1
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }
        if key.code == KeyCode::Esc {
            log::debug!("Layer 1: Esc - dispatching Close");
            dispatcher.dispatch(Action::Global(GlobalAction::Close));
            return;
        }

        // Layer 2
        let Some(view) = state.active_view() else {
            return;
        };
        match view.translate_key(key, state) {
            Some(action) => dispatcher.dispatch(action),
            None => log::trace!("Key {:?} unused by {:?}", key.code, view.view_id()),
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            return false;
        }
        true
    }
}
