//! View model for the activity panel

use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct ActivityViewModel {
    pub title: String,
    /// Label/value pairs shown above the feed
    pub details: Vec<(&'static str, String)>,
    /// (time, message), in delivery order
    pub entries: Vec<(String, String)>,
}

impl ActivityViewModel {
    /// Build the panel for the item under the cursor, if any
    pub fn from_state(state: &AppState) -> Option<Self> {
        let item = state.selected_notification()?;

        let mut details = vec![
            ("Repository", item.repository.clone()),
            (
                "Type",
                format!("{} {}", item.kind.icon(), item.kind.label()),
            ),
            ("Status", item.status.label().to_string()),
            ("Author", item.author.clone()),
            ("Link", item.url.clone()),
        ];
        if let Some(updated) = item.updated_at {
            details.push(("Updated", updated.format("%Y-%m-%d %H:%M").to_string()));
        }

        let entries = item
            .activity
            .iter()
            .map(|entry| {
                let time = entry
                    .at
                    .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string());
                (time, entry.message.clone())
            })
            .collect();

        Some(Self {
            title: item.title.clone(),
            details,
            entries,
        })
    }
}
