//! View model for the inbox list

use crate::domain_models::derivation::tab_counts;
use crate::domain_models::{InboxTab, Notification, NotificationStatus};
use crate::state::AppState;
use crate::theme::Theme;
use ratatui::style::Color;

/// View model for the tab bar and notification list
#[derive(Debug, Clone)]
pub struct InboxViewModel {
    /// Tab titles with counts, in tab order
    pub tabs: Vec<String>,
    pub active_tab: usize,
    /// Section headers and rows, flattened in display order
    pub lines: Vec<InboxLine>,
    /// Index into `lines` of the row under the cursor
    pub selected_line: Option<usize>,
    /// Shown instead of the list when the tab has no rows
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub enum InboxLine {
    Section { title: String, count: usize },
    Row(RowViewModel),
}

/// View model for a single notification row
#[derive(Debug, Clone)]
pub struct RowViewModel {
    pub unread_marker: &'static str, // "●"
    pub pin_marker: &'static str,    // "★"
    pub kind_icon: &'static str,
    pub title: String,
    /// "octo/hello · octocat" or just the author
    pub context: String,
    pub status_text: String,
    pub status_color: Color,
    pub fg_color: Color,
    /// Unread rows are emphasized
    pub bold: bool,
}

impl InboxViewModel {
    /// Transform state into display-ready view model
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let inbox = &state.inbox;
        let items = inbox.repository.items();

        let tabs = tab_counts(items, &state.preferences, state.username())
            .into_iter()
            .map(|(tab, count)| format!(" {} ({}) ", tab.label(), count))
            .collect();
        let active_tab = InboxTab::ALL
            .iter()
            .position(|t| *t == inbox.tab)
            .unwrap_or(0);

        let content = inbox.content(&state.preferences, state.username());
        let rows = content.rows();
        let selected_id = inbox.cursor(&rows).map(|index| rows[index].id);

        let mut lines = Vec::with_capacity(content.len() + content.sections.len());
        let mut selected_line = None;
        for (title, section) in &content.sections {
            lines.push(InboxLine::Section {
                title: title.clone(),
                count: section.len(),
            });
            for item in section {
                if Some(item.id) == selected_id {
                    selected_line = Some(lines.len());
                }
                lines.push(InboxLine::Row(Self::build_row(
                    item,
                    content.show_repository,
                    theme,
                )));
            }
        }

        let empty_message = if content.is_empty() {
            Some(Self::empty_message(inbox.tab, state))
        } else {
            None
        };

        Self {
            tabs,
            active_tab,
            lines,
            selected_line,
            empty_message,
        }
    }

    fn build_row(item: &Notification, show_repository: bool, theme: &Theme) -> RowViewModel {
        let context = if show_repository {
            format!("{} · {}", item.repository, item.author)
        } else {
            item.author.clone()
        };

        let fg_color = if item.unread {
            theme.text_primary
        } else {
            theme.text_muted
        };

        RowViewModel {
            unread_marker: if item.unread { "●" } else { " " },
            pin_marker: if item.pinned { "★" } else { " " },
            kind_icon: item.kind.icon(),
            title: item.title.clone(),
            context,
            status_text: item.status.label().to_string(),
            status_color: Self::status_color(item.status, theme),
            fg_color,
            bold: item.unread,
        }
    }

    fn status_color(status: NotificationStatus, theme: &Theme) -> Color {
        match status {
            NotificationStatus::Open => theme.subject_open,
            NotificationStatus::Merged => theme.subject_merged,
            NotificationStatus::Closed => theme.subject_closed,
        }
    }

    fn empty_message(tab: InboxTab, state: &AppState) -> &'static str {
        match tab {
            InboxTab::MyPullRequests | InboxTab::MyIssues if !state.app_config.has_username() => {
                "Set GH_NOTI_USERNAME to see your own pull requests and issues"
            }
            InboxTab::Pinned => "Nothing pinned yet. Press p to pin the selected item",
            _ if !tab.is_category()
                && !state.inbox.repository.is_empty()
                && (state.preferences.hide_read || state.preferences.hide_closed_merged) =>
            {
                "Everything is hidden by the current filters"
            }
            _ => "No notifications",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{DisplayPreferences, NotificationKind};
    use pretty_assertions::assert_eq;

    fn state_with(items: Vec<Notification>) -> AppState {
        let mut state = AppState::default();
        state.inbox.repository.begin_fetch();
        state.inbox.repository.replace(items);
        state
    }

    fn row_titles(vm: &InboxViewModel) -> Vec<&str> {
        vm.lines
            .iter()
            .filter_map(|line| match line {
                InboxLine::Row(row) => Some(row.title.as_str()),
                InboxLine::Section { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_grouped_lines_and_selection() {
        let mut state = state_with(vec![
            Notification::new(1, NotificationKind::PullRequest, "a", "one"),
            Notification::new(2, NotificationKind::Issue, "b", "two"),
            Notification::new(3, NotificationKind::Issue, "a", "three"),
        ]);
        state.preferences = DisplayPreferences {
            group_by_repo: true,
            ..Default::default()
        };
        state.inbox.selected_id = Some(2);

        let vm = InboxViewModel::from_state(&state);
        assert_eq!(row_titles(&vm), vec!["one", "three", "two"]);
        // Section "a", 1, 3, section "b", 2
        assert_eq!(vm.selected_line, Some(4));
        assert!(matches!(&vm.lines[0], InboxLine::Section { title, count: 2 } if title == "a"));
        assert_eq!(vm.tabs[0], " All (3) ");
        assert!(vm.empty_message.is_none());
    }

    #[test]
    fn test_row_markers() {
        let state = state_with(vec![Notification::new(1, NotificationKind::Issue, "a", "t")
            .with_pinned(true)
            .with_unread(false)
            .with_author("octocat")]);

        let vm = InboxViewModel::from_state(&state);
        let InboxLine::Row(row) = &vm.lines[1] else {
            panic!("expected a row");
        };
        assert_eq!(row.pin_marker, "★");
        assert_eq!(row.unread_marker, " ");
        assert!(!row.bold);
        // Ungrouped rows name their repository
        assert_eq!(row.context, "a · octocat");
    }

    #[test]
    fn test_empty_mine_tab_asks_for_username() {
        let mut state = state_with(vec![]);
        state.inbox.tab = InboxTab::MyPullRequests;

        let vm = InboxViewModel::from_state(&state);
        assert_eq!(
            vm.empty_message,
            Some("Set GH_NOTI_USERNAME to see your own pull requests and issues")
        );
        assert_eq!(vm.active_tab, 3);
    }
}
