use crate::actions::{Action, PreferencesAction};
use crate::domain_models::DisplayPreferences;

/// Reducer for display toggles
pub fn reduce(prefs: DisplayPreferences, action: &Action) -> DisplayPreferences {
    match action {
        Action::Preferences(PreferencesAction::Loaded(loaded)) => *loaded,
        Action::Preferences(PreferencesAction::Toggle(preference)) => prefs.toggled(*preference),
        _ => prefs,
    }
}
