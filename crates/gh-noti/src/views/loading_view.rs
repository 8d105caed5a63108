use crate::actions::{Action, GlobalAction};
use crate::state::AppState;
use crate::views::{View, ViewId};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Shown until the first fetch has been answered
#[derive(Debug, Clone)]
pub struct LoadingView;

impl LoadingView {
    pub fn new() -> Self {
        Self
    }
}

impl View for LoadingView {
    fn view_id(&self) -> ViewId {
        ViewId::Loading
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        f.render_widget(Block::default().style(theme.text().bg(theme.bg_primary)), area);

        let [_, center, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(area);

        let lines = vec![
            Line::from(Span::styled("Loading notifications...", theme.panel_title())),
            Line::from(Span::styled(
                state.app_config.backend_url.clone(),
                theme.muted(),
            )),
            Line::from(vec![
                Span::styled("q", theme.key_hint()),
                Span::styled(" quit", theme.key_description()),
            ]),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_key(&self, key: KeyEvent, _state: &AppState) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => Some(Action::Global(GlobalAction::Close)),
            _ => None,
        }
    }
}
