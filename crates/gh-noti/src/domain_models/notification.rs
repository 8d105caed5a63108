//! Notification model
//!
//! Domain model for an inbox item: one pull request or issue with the
//! notifications that arrived for it.

use chrono::{DateTime, Local};
use gh_noti_client::{Thread, ThreadActivity, ThreadKind, ThreadStatus};

/// An inbox item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Stable id, unique within the inbox
    pub id: i64,
    pub kind: NotificationKind,
    /// Owning repository (e.g. "rust-lang/rust")
    pub repository: String,
    pub title: String,
    pub status: NotificationStatus,
    /// Pinned by the user
    pub pinned: bool,
    /// Author username
    pub author: String,
    /// Whether a review was requested from the user
    pub review_requested: bool,
    /// Link to the subject on GitHub
    pub url: String,
    pub unread: bool,
    /// When the subject last changed upstream
    pub updated_at: Option<DateTime<Local>>,
    /// Activity feed, oldest first as delivered
    pub activity: Vec<Activity>,
}

impl Notification {
    /// Merged or closed
    pub fn is_done(&self) -> bool {
        matches!(
            self.status,
            NotificationStatus::Merged | NotificationStatus::Closed
        )
    }
}

#[cfg(test)]
impl Notification {
    /// Create a new unread, unpinned notification with the given data
    pub fn new(
        id: i64,
        kind: NotificationKind,
        repository: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            repository: repository.into(),
            title: title.into(),
            status: NotificationStatus::Open,
            pinned: false,
            author: String::new(),
            review_requested: false,
            url: String::new(),
            unread: true,
            updated_at: None,
            activity: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: NotificationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_unread(mut self, unread: bool) -> Self {
        self.unread = unread;
        self
    }

    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    pub fn with_review_requested(mut self, review_requested: bool) -> Self {
        self.review_requested = review_requested;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl From<Thread> for Notification {
    fn from(thread: Thread) -> Self {
        let updated_at = thread
            .updated_at
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|ts| ts.with_timezone(&Local));

        Self {
            id: thread.id,
            kind: thread.kind.into(),
            repository: thread.repository,
            title: thread.title,
            status: thread.status.into(),
            pinned: thread.pinned,
            author: thread.author,
            review_requested: thread.review_requested,
            url: thread.url,
            unread: thread.unread,
            updated_at,
            activity: thread.activity.into_iter().map(Activity::from).collect(),
        }
    }
}

/// A single entry in a notification's activity feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub message: String,
    pub at: Option<DateTime<Local>>,
}

impl From<ThreadActivity> for Activity {
    fn from(activity: ThreadActivity) -> Self {
        let at = activity.local_time();
        Self {
            message: activity.message,
            at,
        }
    }
}

/// Pull request or issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    PullRequest,
    Issue,
}

impl From<ThreadKind> for NotificationKind {
    fn from(kind: ThreadKind) -> Self {
        match kind {
            ThreadKind::PullRequest => NotificationKind::PullRequest,
            ThreadKind::Issue => NotificationKind::Issue,
        }
    }
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::PullRequest => "⑂",
            Self::Issue => "◉",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PullRequest => "PR",
            Self::Issue => "Issue",
        }
    }
}

/// Subject state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationStatus {
    Open,
    Merged,
    Closed,
}

impl From<ThreadStatus> for NotificationStatus {
    fn from(status: ThreadStatus) -> Self {
        match status {
            ThreadStatus::Open => NotificationStatus::Open,
            ThreadStatus::Merged => NotificationStatus::Merged,
            ThreadStatus::Closed => NotificationStatus::Closed,
        }
    }
}

impl NotificationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Merged => "Merged",
            Self::Closed => "Closed",
        }
    }
}

/// Loading state of the inbox
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    /// Not started loading
    #[default]
    Idle,
    /// At least one fetch in flight
    Loading,
    /// Last fetch succeeded
    Loaded,
    /// Last fetch failed
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_thread() {
        let thread = Thread {
            id: 3,
            kind: ThreadKind::Issue,
            repository: "octo/hello".to_string(),
            title: "Crash on start".to_string(),
            status: ThreadStatus::Closed,
            pinned: true,
            author: "octocat".to_string(),
            review_requested: false,
            url: "https://github.com/octo/hello/issues/3".to_string(),
            unread: false,
            updated_at: Some("2024-05-01T10:00:00Z".to_string()),
            activity: vec![ThreadActivity {
                id: 1,
                message: "Closed as completed".to_string(),
                timestamp: "not a timestamp".to_string(),
            }],
        };

        let notification = Notification::from(thread);
        assert_eq!(notification.id, 3);
        assert_eq!(notification.kind, NotificationKind::Issue);
        assert_eq!(notification.status, NotificationStatus::Closed);
        assert!(notification.pinned);
        assert!(!notification.unread);
        assert!(notification.is_done());
        assert!(notification.updated_at.is_some());
        assert_eq!(notification.activity.len(), 1);
        assert_eq!(notification.activity[0].message, "Closed as completed");
        assert!(notification.activity[0].at.is_none());
    }

    #[test]
    fn test_is_done() {
        let open = Notification::new(1, NotificationKind::PullRequest, "a/b", "t");
        assert!(!open.is_done());
        assert!(open
            .clone()
            .with_status(NotificationStatus::Merged)
            .is_done());
        assert!(open.with_status(NotificationStatus::Closed).is_done());
    }
}
