//! Inbox reducer
//!
//! Applies fetch results and optimistic edits to the repository, and moves
//! the cursor. Remote side effects live in `InboxMiddleware`.

use crate::actions::{Action, InboxAction};
use crate::domain_models::DisplayPreferences;
use crate::state::InboxState;

pub fn reduce(
    mut inbox: InboxState,
    action: &Action,
    prefs: &DisplayPreferences,
    username: &str,
) -> InboxState {
    let Action::Inbox(action) = action else {
        return inbox;
    };

    match action {
        InboxAction::Refresh | InboxAction::ForceRefresh => {
            inbox.repository.begin_fetch();
        }
        InboxAction::Loaded(items) => {
            inbox.repository.replace(items.clone());
        }
        InboxAction::LoadFailed(message) => {
            inbox.repository.fail_fetch(message.clone());
        }
        InboxAction::TogglePin(id) => {
            inbox.repository.toggle_pin(*id);
        }
        InboxAction::ToggleRead(id) => {
            inbox.repository.toggle_read(*id);
        }
        InboxAction::MarkRead(id) => {
            inbox.repository.mark_read(*id);
        }
        InboxAction::Open(_) => {}
        InboxAction::NavigateNext
        | InboxAction::NavigatePrevious
        | InboxAction::NavigateToTop
        | InboxAction::NavigateToBottom => {
            inbox.selected_id = move_cursor(&inbox, action, prefs, username);
        }
        InboxAction::NextTab => {
            inbox.tab = inbox.tab.next();
            log::debug!("Switched to tab {}", inbox.tab.label());
        }
        InboxAction::PreviousTab => {
            inbox.tab = inbox.tab.prev();
            log::debug!("Switched to tab {}", inbox.tab.label());
        }
    }

    inbox
}

/// Id under the cursor after a navigation action
fn move_cursor(
    inbox: &InboxState,
    action: &InboxAction,
    prefs: &DisplayPreferences,
    username: &str,
) -> Option<i64> {
    let rows = inbox.content(prefs, username).rows();
    let current = inbox.cursor(&rows)?;
    let last = rows.len() - 1;

    // Navigation wraps around at both ends
    let next = match action {
        InboxAction::NavigateNext => {
            if current >= last {
                0
            } else {
                current + 1
            }
        }
        InboxAction::NavigatePrevious => {
            if current == 0 {
                last
            } else {
                current - 1
            }
        }
        InboxAction::NavigateToTop => 0,
        InboxAction::NavigateToBottom => last,
        _ => current,
    };
    Some(rows[next].id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{InboxTab, Notification, NotificationKind};
    use pretty_assertions::assert_eq;

    fn loaded(items: Vec<Notification>) -> InboxState {
        let inbox = reduce(
            InboxState::default(),
            &Action::Inbox(InboxAction::Refresh),
            &DisplayPreferences::default(),
            "",
        );
        reduce(
            inbox,
            &Action::Inbox(InboxAction::Loaded(items)),
            &DisplayPreferences::default(),
            "",
        )
    }

    fn apply(inbox: InboxState, action: InboxAction) -> InboxState {
        reduce(inbox, &Action::Inbox(action), &DisplayPreferences::default(), "")
    }

    fn pr(id: i64) -> Notification {
        Notification::new(id, NotificationKind::PullRequest, "a/b", "t")
    }

    #[test]
    fn test_toggle_pin_applies_immediately() {
        let inbox = loaded(vec![pr(1)]);
        let inbox = apply(inbox, InboxAction::TogglePin(1));
        assert!(inbox.repository.get(1).unwrap().pinned);
    }

    #[test]
    fn test_failed_refresh_keeps_collection() {
        let inbox = loaded(vec![pr(1), pr(2)]);
        let before = inbox.repository.items().to_vec();

        let inbox = apply(inbox, InboxAction::Refresh);
        let inbox = apply(inbox, InboxAction::LoadFailed("HTTP 500".to_string()));

        assert_eq!(inbox.repository.items(), before.as_slice());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut inbox = loaded(vec![pr(1), pr(2), pr(3)]);
        inbox = apply(inbox, InboxAction::NavigateNext);
        assert_eq!(inbox.selected_id, Some(2));
        inbox = apply(inbox, InboxAction::NavigateToBottom);
        assert_eq!(inbox.selected_id, Some(3));
        inbox = apply(inbox, InboxAction::NavigateNext);
        assert_eq!(inbox.selected_id, Some(1));
        inbox = apply(inbox, InboxAction::NavigatePrevious);
        assert_eq!(inbox.selected_id, Some(3));
        inbox = apply(inbox, InboxAction::NavigateToTop);
        assert_eq!(inbox.selected_id, Some(1));
    }

    #[test]
    fn test_navigation_on_empty_inbox() {
        let inbox = apply(InboxState::default(), InboxAction::NavigateNext);
        assert_eq!(inbox.selected_id, None);
    }

    #[test]
    fn test_tab_cycling() {
        let inbox = apply(InboxState::default(), InboxAction::PreviousTab);
        assert_eq!(inbox.tab, InboxTab::Pinned);
        let inbox = apply(inbox, InboxAction::NextTab);
        assert_eq!(inbox.tab, InboxTab::All);
    }
}
