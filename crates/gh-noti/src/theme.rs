use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,

    // Subject state colors
    pub subject_open: Color,
    pub subject_merged: Color,
    pub subject_closed: Color,

    // Item markers
    pub unread_marker: Color,
    pub pinned_marker: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,

            subject_open: tailwind::GREEN.c400,
            subject_merged: tailwind::PURPLE.c400,
            subject_closed: tailwind::RED.c400,

            unread_marker: tailwind::BLUE.c400,
            pinned_marker: tailwind::AMBER.c400,

            selected_bg: tailwind::BLUE.c700,
            selected_fg: Color::White,
        }
    }

    /// Style for panel backgrounds (popups)
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for repository section headers
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "p" in "p pin")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the active tab
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.accent_secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the row under the cursor
    pub fn row_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}
