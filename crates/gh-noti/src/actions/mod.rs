//! Actions module
//!
//! Tagged action architecture: every action names the part of the
//! application it belongs to.

pub mod bootstrap;
pub mod global;
pub mod inbox;
pub mod preferences;
pub mod sync;

pub use bootstrap::BootstrapAction;
pub use global::GlobalAction;
pub use inbox::InboxAction;
pub use preferences::PreferencesAction;
pub use sync::SyncAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Application-wide actions (keys, quit, view management)
    Global(GlobalAction),
    /// Startup sequence
    Bootstrap(BootstrapAction),
    /// Notification list and inbox navigation
    Inbox(InboxAction),
    /// Display toggles
    Preferences(PreferencesAction),
    /// Outbound state changes for the backend
    Sync(SyncAction),
}
