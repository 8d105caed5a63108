use crate::domain_models::{DisplayPreference, DisplayPreferences};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferencesAction {
    /// Stored values read at startup
    Loaded(DisplayPreferences),
    /// Flip one toggle
    Toggle(DisplayPreference),
}
