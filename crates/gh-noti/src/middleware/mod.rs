use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod inbox_middleware;
pub mod keyboard_middleware;
pub mod logging;
pub mod polling_middleware;
pub mod preferences_middleware;
pub mod sync_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the main thread. Anything slow (HTTP calls, opening
/// a browser) is spawned onto the tokio runtime and reports back through
/// the dispatcher.
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state, before this action is reduced
    /// - `dispatcher`: Use to dispatch follow-up actions
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
