//! Backend data transfer objects
//!
//! These types mirror the JSON the notification backend speaks. They are
//! intentionally separate from the application's domain models to keep this
//! crate reusable.

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

/// A notification thread: one pull request or issue with its activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    /// Stable thread id
    pub id: i64,

    /// Pull request or issue
    #[serde(rename = "type")]
    pub kind: ThreadKind,

    /// Owning repository (e.g. "rust-lang/rust")
    #[serde(rename = "repo")]
    pub repository: String,

    /// Subject title
    pub title: String,

    /// Current subject state
    pub status: ThreadStatus,

    /// Pinned by the user
    #[serde(default)]
    pub pinned: bool,

    /// Author's GitHub username
    pub author: String,

    /// Whether a review was requested from the user
    #[serde(rename = "reviewRequested", default)]
    pub review_requested: bool,

    /// Link to the subject on GitHub
    pub url: String,

    /// Unread flag
    #[serde(default)]
    pub unread: bool,

    /// Last upstream update, as reported by the backend
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Individual notifications belonging to this thread
    #[serde(rename = "notifications", default, deserialize_with = "null_as_empty")]
    pub activity: Vec<ThreadActivity>,
}

/// Subject type of a thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreadKind {
    PullRequest,
    Issue,
}

/// Subject state of a thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadStatus {
    Open,
    Merged,
    Closed,
}

/// A single notification inside a thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadActivity {
    pub id: i64,
    pub message: String,
    pub timestamp: String,
}

impl ThreadActivity {
    /// Parse the RFC 3339 timestamp into local time
    pub fn local_time(&self) -> Option<DateTime<Local>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Local))
    }
}

/// State change reported to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThreadAction {
    /// Flip the pinned flag
    TogglePin,
    /// Flip the unread flag
    ToggleRead,
    /// Force the thread to read
    Read,
}

impl ThreadAction {
    /// Whether applying the action twice leaves the same state as once
    pub fn is_idempotent(self) -> bool {
        matches!(self, Self::Read)
    }
}

/// Body of `POST /updateThread`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadUpdate {
    pub action: ThreadAction,
    pub thread_id: i64,
}

impl ThreadUpdate {
    pub fn new(action: ThreadAction, thread_id: i64) -> Self {
        Self { action, thread_id }
    }
}

/// The backend encodes empty lists as `null`
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
