//! Inbox actions

use crate::domain_models::Notification;

#[derive(Debug, Clone, PartialEq)]
pub enum InboxAction {
    /// Fetch the notification list
    Refresh,
    /// Ask the backend to re-pull from GitHub, then fetch
    ForceRefresh,
    /// A fetch returned this payload
    Loaded(Vec<Notification>),
    /// A fetch (or force pull) failed
    LoadFailed(String),

    TogglePin(i64),
    ToggleRead(i64),
    MarkRead(i64),
    /// Open in the browser and mark read
    Open(i64),

    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    NextTab,
    PreviousTab,
}
