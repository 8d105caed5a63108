use crate::actions::Action;
use crate::state::AppState;
use ratatui::{crossterm::event::KeyEvent, layout::Rect, Frame};

pub mod activity_view;
pub mod inbox_view;
pub mod loading_view;

pub use activity_view::ActivityView;
pub use inbox_view::InboxView;
pub use loading_view::LoadingView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Loading,
    Inbox,
    Activity,
}

/// View trait - defines the interface that all views must implement
///
/// Views live in the view stack as trait objects, so the trait must stay
/// object-safe.
pub trait View: std::fmt::Debug + Send {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Clone this view into a Box
    /// This is needed because Clone requires Sized, so we provide a manual clone method
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a key press into this view's action
    ///
    /// Ctrl+C and Esc are handled before views are asked.
    fn translate_key(&self, _key: KeyEvent, _state: &AppState) -> Option<Action> {
        None
    }
}

/// Implement Clone for Box<dyn View>
impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// Views are rendered bottom-up so floating views end up on top.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        view.render(state, area, f);
    }
}
