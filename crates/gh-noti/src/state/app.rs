//! Application State

use gh_noti_config::AppConfig;

use crate::domain_models::DisplayPreferences;
use crate::theme::Theme;
use crate::views::{LoadingView, View};

use super::InboxState;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    /// Views are rendered bottom-up, so the last view in the stack renders on top
    pub view_stack: Vec<Box<dyn View>>,
    pub inbox: InboxState,
    pub preferences: DisplayPreferences,
    pub theme: Theme,
    /// Application configuration, fixed for the session
    pub app_config: AppConfig,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(LoadingView::new())],
            inbox: InboxState::default(),
            preferences: DisplayPreferences::default(),
            theme: Theme::default(),
            app_config,
        }
    }

    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|v| v.as_ref())
    }

    pub fn username(&self) -> &str {
        &self.app_config.username
    }

    /// Item under the cursor in the inbox
    pub fn selected_notification(&self) -> Option<&crate::domain_models::Notification> {
        self.inbox.selected(&self.preferences, self.username())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
