//! Inbox tabs
//!
//! Each tab is a different projection of the same notification list.

use crate::domain_models::NotificationKind;

/// Tab of the inbox view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InboxTab {
    /// Everything that passes the display filters
    #[default]
    All,
    PullRequests,
    Issues,
    /// Pull requests authored by the user
    MyPullRequests,
    /// Issues authored by the user
    MyIssues,
    /// Pull requests waiting for the user's review
    ReviewRequested,
    Pinned,
}

impl InboxTab {
    pub const ALL: [InboxTab; 7] = [
        InboxTab::All,
        InboxTab::PullRequests,
        InboxTab::Issues,
        InboxTab::MyPullRequests,
        InboxTab::MyIssues,
        InboxTab::ReviewRequested,
        InboxTab::Pinned,
    ];

    /// Get the display label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            InboxTab::All => "All",
            InboxTab::PullRequests => "Pull Requests",
            InboxTab::Issues => "Issues",
            InboxTab::MyPullRequests => "PRs by me",
            InboxTab::MyIssues => "Issues by me",
            InboxTab::ReviewRequested => "Review Requested",
            InboxTab::Pinned => "Pinned",
        }
    }

    /// Kind filter applied after grouping
    pub fn kind_filter(&self) -> Option<NotificationKind> {
        match self {
            InboxTab::All | InboxTab::Pinned => None,
            InboxTab::PullRequests | InboxTab::MyPullRequests | InboxTab::ReviewRequested => {
                Some(NotificationKind::PullRequest)
            }
            InboxTab::Issues | InboxTab::MyIssues => Some(NotificationKind::Issue),
        }
    }

    /// Whether the tab shows a fixed category instead of the filtered inbox
    ///
    /// Category tabs ignore the hide filters and repository grouping.
    pub fn is_category(&self) -> bool {
        !matches!(
            self,
            InboxTab::All | InboxTab::PullRequests | InboxTab::Issues
        )
    }

    /// Section title of a category tab
    pub fn category_title(&self) -> Option<&'static str> {
        match self {
            InboxTab::MyPullRequests => Some("My Pull Requests"),
            InboxTab::MyIssues => Some("My Issues"),
            InboxTab::ReviewRequested => Some("Review Requested"),
            InboxTab::Pinned => Some("Pinned Items"),
            InboxTab::All | InboxTab::PullRequests | InboxTab::Issues => None,
        }
    }

    /// Cycle to the next tab
    pub fn next(&self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Cycle to the previous tab
    pub fn prev(&self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}
