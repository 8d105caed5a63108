use crate::actions::{Action, GlobalAction, InboxAction};
use crate::state::AppState;
use crate::view_models::ActivityViewModel;
use crate::views::{View, ViewId};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Flex, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
    Frame,
};

/// Floating panel with the details and activity feed of the selected item
#[derive(Debug, Clone)]
pub struct ActivityView;

impl ActivityView {
    pub fn new() -> Self {
        Self
    }
}

impl View for ActivityView {
    fn view_id(&self) -> ViewId {
        ViewId::Activity
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_key(&self, key: KeyEvent, state: &AppState) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('a') => Some(Action::Global(GlobalAction::Close)),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::Inbox(InboxAction::NavigateNext)),
            KeyCode::Char('k') | KeyCode::Up => {
                Some(Action::Inbox(InboxAction::NavigatePrevious))
            }
            KeyCode::Enter => state
                .selected_notification()
                .map(|n| Action::Inbox(InboxAction::Open(n.id))),
            _ => None,
        }
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    // Dim the inbox underneath
    f.render_widget(Block::default().style(theme.muted().dim()), area);

    let [popup_area] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(area);
    let [popup_area] = Layout::vertical([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(popup_area);

    f.render_widget(Clear, popup_area);

    let hints = Line::from(vec![
        Span::styled(" Enter", theme.key_hint()),
        Span::styled(" open ", theme.key_description()),
        Span::styled(" j/k", theme.key_hint()),
        Span::styled(" next/prev ", theme.key_description()),
        Span::styled(" q", theme.key_hint()),
        Span::styled(" close ", theme.key_description()),
    ]);

    let Some(vm) = ActivityViewModel::from_state(state) else {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme.panel_border())
            .title(Span::styled(" Activity ", theme.panel_title()))
            .title_bottom(hints)
            .style(theme.panel_background());
        f.render_widget(
            Paragraph::new(Span::styled("Nothing selected", theme.muted())).block(block),
            popup_area,
        );
        return;
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.panel_border())
        .title(Span::styled(format!(" {} ", vm.title), theme.panel_title()))
        .title_bottom(hints)
        .style(theme.panel_background());

    let mut lines: Vec<Line> = vm
        .details
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:<12}", label), theme.key_description()),
                Span::styled(value.clone(), theme.text()),
            ])
        })
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Activity", theme.section_header())));

    if vm.entries.is_empty() {
        lines.push(Line::from(Span::styled("No activity", theme.muted())));
    }
    for (time, message) in &vm.entries {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<18}", time), theme.muted()),
            Span::styled(message.clone(), theme.text()),
        ]));
    }

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        popup_area,
    );
}
