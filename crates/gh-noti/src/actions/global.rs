//! Global actions - not tied to any specific view

use ratatui::crossterm::event::KeyEvent;

use crate::views::View;

#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Close the current view (pop from stack)
    Close,
    /// Quit the application
    Quit,
    /// Push a floating view onto the stack
    PushView(Box<dyn View>),
}
