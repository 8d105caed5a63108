//! Inbox state
//!
//! The notification repository plus what the user is looking at.

use crate::domain_models::derivation::{derive_tab, TabContent};
use crate::domain_models::{DisplayPreferences, InboxTab, Notification};

use super::NotificationRepository;

#[derive(Debug, Clone, Default)]
pub struct InboxState {
    pub repository: NotificationRepository,
    pub tab: InboxTab,
    /// Cursor, tracked by id so it survives refreshes and filter changes
    pub selected_id: Option<i64>,
}

impl InboxState {
    /// Content of the active tab
    pub fn content(&self, prefs: &DisplayPreferences, username: &str) -> TabContent<'_> {
        derive_tab(self.tab, self.repository.items(), prefs, username)
    }

    /// Cursor position within `rows`
    ///
    /// Falls back to the first row when the selected item is not visible.
    pub fn cursor(&self, rows: &[&Notification]) -> Option<usize> {
        if rows.is_empty() {
            return None;
        }
        let position = self
            .selected_id
            .and_then(|id| rows.iter().position(|n| n.id == id));
        Some(position.unwrap_or(0))
    }

    /// Item under the cursor in the active tab
    pub fn selected(&self, prefs: &DisplayPreferences, username: &str) -> Option<&Notification> {
        let rows = self.content(prefs, username).rows();
        self.cursor(&rows).map(|index| rows[index])
    }
}
