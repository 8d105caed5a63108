//! Preferences Middleware
//!
//! Reads the display toggles on bootstrap and writes every change back.

use crate::actions::{Action, BootstrapAction, PreferencesAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{DisplayPreference, DisplayPreferences};
use crate::middleware::Middleware;
use crate::state::AppState;
use gh_noti_config::PreferenceStore;

pub struct PreferencesMiddleware {
    store: PreferenceStore,
}

impl PreferencesMiddleware {
    pub fn new(store: PreferenceStore) -> Self {
        Self { store }
    }

    fn load(&self) -> DisplayPreferences {
        let mut prefs = DisplayPreferences::default();
        for preference in DisplayPreference::ALL {
            prefs.set(preference, self.store.get(preference.key(), false));
        }
        prefs
    }
}

impl Middleware for PreferencesMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                if !self.store.is_persistent() {
                    log::info!("PreferencesMiddleware: preferences kept for this session only");
                }
                let prefs = self.load();
                log::debug!("PreferencesMiddleware: loaded {:?}", prefs);
                dispatcher.dispatch(Action::Preferences(PreferencesAction::Loaded(prefs)));
            }
            Action::Preferences(PreferencesAction::Toggle(preference)) => {
                let value = !state.preferences.get(*preference);
                self.store.set(preference.key(), &value);
            }
            _ => {}
        }
        true
    }
}
