//! Inbox view
//!
//! Renders the tab bar, the notification list and the status bar.

use crate::actions::{Action, GlobalAction, InboxAction, PreferencesAction};
use crate::domain_models::DisplayPreference;
use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::status_bar_view_model::toggle_key;
use crate::view_models::{InboxLine, InboxViewModel, RowViewModel, StatusBarViewModel};
use crate::views::{ActivityView, View, ViewId};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

#[derive(Debug, Clone)]
pub struct InboxView;

impl InboxView {
    pub fn new() -> Self {
        Self
    }
}

impl View for InboxView {
    fn view_id(&self) -> ViewId {
        ViewId::Inbox
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_key(&self, key: KeyEvent, state: &AppState) -> Option<Action> {
        let selected = state.selected_notification().map(|n| n.id);
        let inbox = |action: InboxAction| Some(Action::Inbox(action));

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => inbox(InboxAction::NavigateNext),
            KeyCode::Char('k') | KeyCode::Up => inbox(InboxAction::NavigatePrevious),
            KeyCode::Home => inbox(InboxAction::NavigateToTop),
            KeyCode::End => inbox(InboxAction::NavigateToBottom),
            KeyCode::Tab => inbox(InboxAction::NextTab),
            KeyCode::BackTab => inbox(InboxAction::PreviousTab),
            KeyCode::Char('r') => inbox(InboxAction::Refresh),
            KeyCode::Char('f') => inbox(InboxAction::ForceRefresh),
            KeyCode::Enter => selected.and_then(|id| inbox(InboxAction::Open(id))),
            KeyCode::Char('p') => selected.and_then(|id| inbox(InboxAction::TogglePin(id))),
            KeyCode::Char('u') => selected.and_then(|id| inbox(InboxAction::ToggleRead(id))),
            KeyCode::Char('m') => selected.and_then(|id| inbox(InboxAction::MarkRead(id))),
            KeyCode::Char('a') => selected.map(|_| {
                Action::Global(GlobalAction::PushView(Box::new(ActivityView::new())))
            }),
            KeyCode::Char('q') => Some(Action::Global(GlobalAction::Close)),
            KeyCode::Char(c) => DisplayPreference::ALL
                .iter()
                .find(|&&preference| toggle_key(preference) == c)
                .map(|&preference| Action::Preferences(PreferencesAction::Toggle(preference))),
            _ => None,
        }
    }
}

/// Render the inbox
fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let [tabs_area, list_area, status_area] = Layout::vertical([
        Constraint::Length(1), // Tab bar
        Constraint::Min(0),    // Notification list
        Constraint::Length(1), // Status bar
    ])
    .areas(area);

    let vm = InboxViewModel::from_state(state);

    let tabs = Tabs::new(vm.tabs.clone())
        .select(vm.active_tab)
        .style(theme.muted())
        .highlight_style(theme.tab_active())
        .divider("");
    f.render_widget(tabs, tabs_area);

    let user = if state.app_config.has_username() {
        format!(" @{} ", state.username())
    } else {
        String::new()
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.panel_border())
        .title(Span::styled(" gh-noti ", theme.panel_title()))
        .title(Line::from(Span::styled(user, theme.muted())).right_aligned());

    if let Some(message) = vm.empty_message {
        let inner = block.inner(list_area);
        f.render_widget(block, list_area);
        let [_, center, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);
        f.render_widget(
            Paragraph::new(Span::styled(message, theme.muted())).alignment(Alignment::Center),
            center,
        );
    } else {
        let items: Vec<ListItem> = vm
            .lines
            .iter()
            .map(|line| match line {
                InboxLine::Section { title, count } => ListItem::new(Line::from(Span::styled(
                    format!("{} ({})", title, count),
                    theme.section_header(),
                ))),
                InboxLine::Row(row) => ListItem::new(row_line(row, theme)),
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(theme.row_selected())
            .highlight_symbol("▶ ");
        let mut list_state = ListState::default().with_selected(vm.selected_line);
        f.render_stateful_widget(list, list_area, &mut list_state);
    }

    let status_vm = StatusBarViewModel::from_state(state);
    f.render_widget(Paragraph::new(status_line(&status_vm, theme)), status_area);
}

fn row_line<'a>(row: &'a RowViewModel, theme: &Theme) -> Line<'a> {
    let mut title_style = Style::default().fg(row.fg_color);
    if row.bold {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::styled(row.unread_marker, Style::default().fg(theme.unread_marker)),
        Span::styled(row.pin_marker, Style::default().fg(theme.pinned_marker)),
        Span::raw(" "),
        Span::styled(row.kind_icon, theme.muted()),
        Span::raw(" "),
        Span::styled(row.title.as_str(), title_style),
        Span::raw("  "),
        Span::styled(row.status_text.as_str(), Style::default().fg(row.status_color)),
        Span::raw("  "),
        Span::styled(row.context.as_str(), theme.muted()),
    ])
}

fn status_line<'a>(vm: &'a StatusBarViewModel, theme: &Theme) -> Line<'a> {
    let mut spans = vec![
        Span::styled(format!(" {} ", vm.status_text), Style::default().fg(vm.status_color)),
        Span::styled("│", theme.muted()),
    ];

    for toggle in &vm.toggles {
        let marker = if toggle.enabled { "[x]" } else { "[ ]" };
        spans.push(Span::styled(format!(" {} ", toggle.key), theme.key_hint()));
        spans.push(Span::styled(
            format!("{} {}", marker, toggle.label),
            theme.key_description(),
        ));
    }

    spans.push(Span::styled(" │", theme.muted()));
    for (key, description) in [
        ("Enter", "open"),
        ("p", "pin"),
        ("u", "read"),
        ("a", "activity"),
        ("r", "refresh"),
        ("f", "force pull"),
        ("q", "quit"),
    ] {
        spans.push(Span::styled(format!(" {}", key), theme.key_hint()));
        spans.push(Span::styled(format!(" {}", description), theme.key_description()));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{Notification, NotificationKind};
    use ratatui::crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with_items() -> AppState {
        let mut state = AppState::default();
        state.inbox.repository.begin_fetch();
        state.inbox.repository.replace(vec![
            Notification::new(7, NotificationKind::PullRequest, "a/b", "first"),
            Notification::new(8, NotificationKind::Issue, "a/b", "second"),
        ]);
        state
    }

    #[test]
    fn test_item_keys_target_selection() {
        let mut state = state_with_items();
        state.inbox.selected_id = Some(8);
        let view = InboxView::new();

        assert!(matches!(
            view.translate_key(key(KeyCode::Char('p')), &state),
            Some(Action::Inbox(InboxAction::TogglePin(8)))
        ));
        assert!(matches!(
            view.translate_key(key(KeyCode::Enter), &state),
            Some(Action::Inbox(InboxAction::Open(8)))
        ));
        assert!(matches!(
            view.translate_key(key(KeyCode::Char('u')), &state),
            Some(Action::Inbox(InboxAction::ToggleRead(8)))
        ));
    }

    #[test]
    fn test_item_keys_without_items() {
        let state = AppState::default();
        let view = InboxView::new();

        assert!(view.translate_key(key(KeyCode::Char('p')), &state).is_none());
        assert!(view.translate_key(key(KeyCode::Char('a')), &state).is_none());
        assert!(matches!(
            view.translate_key(key(KeyCode::Char('r')), &state),
            Some(Action::Inbox(InboxAction::Refresh))
        ));
    }

    #[test]
    fn test_preference_keys() {
        let state = state_with_items();
        let view = InboxView::new();

        assert!(matches!(
            view.translate_key(key(KeyCode::Char('g')), &state),
            Some(Action::Preferences(PreferencesAction::Toggle(
                DisplayPreference::GroupByRepo
            )))
        ));
        assert!(matches!(
            view.translate_key(key(KeyCode::Char('c')), &state),
            Some(Action::Preferences(PreferencesAction::Toggle(
                DisplayPreference::HideClosedMerged
            )))
        ));
        assert!(view.translate_key(key(KeyCode::Char('z')), &state).is_none());
    }

    #[test]
    fn test_tab_keys() {
        let state = AppState::default();
        let view = InboxView::new();
        assert!(matches!(
            view.translate_key(key(KeyCode::BackTab), &state),
            Some(Action::Inbox(InboxAction::PreviousTab))
        ));
    }
}
