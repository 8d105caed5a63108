//! Domain models
//!
//! Inbox items, tabs and display preferences, plus the pure functions that
//! derive what each tab shows.

pub mod derivation;
pub mod display_preferences;
pub mod inbox_tab;
pub mod notification;

pub use display_preferences::{DisplayPreference, DisplayPreferences};
pub use inbox_tab::InboxTab;
pub use notification::{Activity, LoadingState, Notification, NotificationKind, NotificationStatus};
