//! Display preferences
//!
//! Three independent toggles, persisted under fixed keys.

/// One of the display toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayPreference {
    HideClosedMerged,
    HideRead,
    GroupByRepo,
}

impl DisplayPreference {
    pub const ALL: [DisplayPreference; 3] = [
        DisplayPreference::HideClosedMerged,
        DisplayPreference::HideRead,
        DisplayPreference::GroupByRepo,
    ];

    /// Storage key
    pub fn key(&self) -> &'static str {
        match self {
            DisplayPreference::HideClosedMerged => "hideClosedMerged",
            DisplayPreference::HideRead => "hideRead",
            DisplayPreference::GroupByRepo => "groupByRepo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayPreference::HideClosedMerged => "Hide closed/merged",
            DisplayPreference::HideRead => "Hide read",
            DisplayPreference::GroupByRepo => "Group by repo",
        }
    }
}

/// Current values of all display toggles; everything off by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayPreferences {
    pub hide_closed_merged: bool,
    pub hide_read: bool,
    pub group_by_repo: bool,
}

impl DisplayPreferences {
    pub fn get(&self, preference: DisplayPreference) -> bool {
        match preference {
            DisplayPreference::HideClosedMerged => self.hide_closed_merged,
            DisplayPreference::HideRead => self.hide_read,
            DisplayPreference::GroupByRepo => self.group_by_repo,
        }
    }

    pub fn set(&mut self, preference: DisplayPreference, value: bool) {
        match preference {
            DisplayPreference::HideClosedMerged => self.hide_closed_merged = value,
            DisplayPreference::HideRead => self.hide_read = value,
            DisplayPreference::GroupByRepo => self.group_by_repo = value,
        }
    }

    /// Copy with one toggle flipped
    pub fn toggled(mut self, preference: DisplayPreference) -> Self {
        self.set(preference, !self.get(preference));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_are_independent() {
        let prefs = DisplayPreferences::default().toggled(DisplayPreference::HideRead);
        assert!(prefs.hide_read);
        assert!(!prefs.hide_closed_merged);
        assert!(!prefs.group_by_repo);

        let prefs = prefs.toggled(DisplayPreference::HideRead);
        assert_eq!(prefs, DisplayPreferences::default());
    }

    #[test]
    fn test_storage_keys() {
        let keys: Vec<_> = DisplayPreference::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys, vec!["hideClosedMerged", "hideRead", "groupByRepo"]);
    }
}
