//! View model for the status bar

use crate::domain_models::{DisplayPreference, LoadingState};
use crate::state::AppState;
use crate::theme::Theme;
use chrono::{DateTime, Local};
use ratatui::style::Color;

const MAX_ERROR_CHARS: usize = 40;

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// "Updated 10:42:07", "Loading...", "Error: ..."
    pub status_text: String,
    pub status_color: Color,
    /// Display toggles with their key and current value
    pub toggles: Vec<ToggleViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleViewModel {
    pub key: char,
    pub label: &'static str,
    pub enabled: bool,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let repository = &state.inbox.repository;
        let (status_text, status_color) = Self::format_loading_state(
            repository.loading_state(),
            repository.last_updated(),
            repository.in_flight(),
            &state.theme,
        );

        let toggles = DisplayPreference::ALL
            .iter()
            .map(|&preference| ToggleViewModel {
                key: toggle_key(preference),
                label: preference.label(),
                enabled: state.preferences.get(preference),
            })
            .collect();

        Self {
            status_text,
            status_color,
            toggles,
        }
    }

    /// Format loading state for display
    fn format_loading_state(
        state: &LoadingState,
        last_updated: Option<&DateTime<Local>>,
        in_flight: usize,
        theme: &Theme,
    ) -> (String, Color) {
        match state {
            LoadingState::Idle => ("Idle".to_string(), theme.text_muted),
            LoadingState::Loading if in_flight > 1 => {
                (format!("Loading ({} requests)...", in_flight), theme.status_warning)
            }
            LoadingState::Loading => ("Loading...".to_string(), theme.status_warning),
            LoadingState::Loaded => {
                let status_text = match last_updated {
                    Some(timestamp) => format!("Updated {}", timestamp.format("%H:%M:%S")),
                    None => "Loaded".to_string(),
                };
                (status_text, theme.status_success)
            }
            LoadingState::Error(err) => {
                let err_short = if err.chars().count() > MAX_ERROR_CHARS {
                    let truncated: String = err.chars().take(MAX_ERROR_CHARS).collect();
                    format!("{}...", truncated)
                } else {
                    err.clone()
                };
                (format!("Error: {}", err_short), theme.status_error)
            }
        }
    }
}

/// Key that flips `preference` in the inbox view
pub fn toggle_key(preference: DisplayPreference) -> char {
    match preference {
        DisplayPreference::HideClosedMerged => 'c',
        DisplayPreference::HideRead => 'h',
        DisplayPreference::GroupByRepo => 'g',
    }
}
