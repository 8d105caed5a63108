use crate::actions::{Action, GlobalAction};
use crate::reducers::{inbox_reducer, preferences_reducer};
use crate::state::AppState;
use crate::views::{InboxView, ViewId};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    // Handle global actions first
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Global(GlobalAction::PushView(new_view)) => {
            // Pushing the view that is already on top toggles it off
            let is_duplicate = state
                .view_stack
                .last()
                .map(|top| top.view_id() == new_view.view_id())
                .unwrap_or(false);

            if is_duplicate {
                log::debug!("Popping view already on top: {:?}", new_view.view_id());
                state.view_stack.pop();
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.view_stack.push(new_view.clone());
            }
        }
        Action::Global(GlobalAction::Close) => {
            // Closing the last view quits the application
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        _ => {}
    }

    // Run sub-reducers
    state.preferences = preferences_reducer::reduce(state.preferences, action);
    state.inbox = inbox_reducer::reduce(
        state.inbox,
        action,
        &state.preferences,
        &state.app_config.username,
    );

    // The first answer, good or bad, ends the loading screen
    let loading = state
        .view_stack
        .first()
        .map(|base| base.view_id() == ViewId::Loading)
        .unwrap_or(false);
    if loading && state.inbox.repository.has_settled() {
        log::debug!("First fetch answered, showing inbox");
        state.view_stack.clear();
        state.view_stack.push(Box::new(InboxView::new()));
    }

    state
}
