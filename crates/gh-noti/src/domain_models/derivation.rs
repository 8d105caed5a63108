//! Inbox view derivation
//!
//! Pure functions that compute what a tab shows from the notification list,
//! the display preferences and the configured username. Nothing here is
//! cached; views call these on every render.

use crate::domain_models::{DisplayPreferences, InboxTab, Notification, NotificationKind};
use indexmap::IndexMap;

/// Title of the single section used when grouping is off
pub const ALL_REPOSITORIES: &str = "All Repositories";

/// Ordered sections; insertion order is first appearance
pub type Sections<'a> = IndexMap<String, Vec<&'a Notification>>;

/// Apply the hide filters
pub fn filter_notifications<'a>(
    items: &'a [Notification],
    prefs: &DisplayPreferences,
) -> Vec<&'a Notification> {
    items
        .iter()
        .filter(|n| !(prefs.hide_closed_merged && n.is_done()))
        .filter(|n| !(prefs.hide_read && !n.unread))
        .collect()
}

/// Partition by repository, or put everything into one section
pub fn group_notifications(items: Vec<&Notification>, group_by_repo: bool) -> Sections<'_> {
    let mut sections = Sections::new();
    if !group_by_repo {
        sections.insert(ALL_REPOSITORIES.to_string(), items);
        return sections;
    }

    for item in items {
        sections
            .entry(item.repository.clone())
            .or_default()
            .push(item);
    }
    sections
}

fn authored_by<'a>(
    items: &'a [Notification],
    username: &str,
    kind: NotificationKind,
) -> Vec<&'a Notification> {
    if username.is_empty() {
        return Vec::new();
    }
    items
        .iter()
        .filter(|n| n.kind == kind && n.author == username)
        .collect()
}

/// Pull requests authored by `username`
pub fn my_pull_requests<'a>(items: &'a [Notification], username: &str) -> Vec<&'a Notification> {
    authored_by(items, username, NotificationKind::PullRequest)
}

/// Issues authored by `username`
pub fn my_issues<'a>(items: &'a [Notification], username: &str) -> Vec<&'a Notification> {
    authored_by(items, username, NotificationKind::Issue)
}

pub fn review_requested(items: &[Notification]) -> Vec<&Notification> {
    items.iter().filter(|n| n.review_requested).collect()
}

pub fn pinned(items: &[Notification]) -> Vec<&Notification> {
    items.iter().filter(|n| n.pinned).collect()
}

/// What a tab shows
#[derive(Debug, Clone)]
pub struct TabContent<'a> {
    pub sections: Sections<'a>,
    /// Whether rows should name their repository
    pub show_repository: bool,
}

impl<'a> TabContent<'a> {
    /// All rows in display order
    pub fn rows(&self) -> Vec<&'a Notification> {
        self.sections.values().flatten().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute the content of `tab`
///
/// Inbox tabs use the filtered and grouped list. Category tabs use the
/// unfiltered list in a single titled section. The tab's kind filter runs
/// last, so sections may end up empty.
pub fn derive_tab<'a>(
    tab: InboxTab,
    items: &'a [Notification],
    prefs: &DisplayPreferences,
    username: &str,
) -> TabContent<'a> {
    let category = match tab {
        InboxTab::All | InboxTab::PullRequests | InboxTab::Issues => None,
        InboxTab::MyPullRequests => Some(my_pull_requests(items, username)),
        InboxTab::MyIssues => Some(my_issues(items, username)),
        InboxTab::ReviewRequested => Some(review_requested(items)),
        InboxTab::Pinned => Some(pinned(items)),
    };

    let (mut sections, show_repository) = match (category, tab.category_title()) {
        (Some(selected), Some(title)) => {
            let mut sections = Sections::new();
            sections.insert(title.to_string(), selected);
            (sections, true)
        }
        _ => (
            group_notifications(filter_notifications(items, prefs), prefs.group_by_repo),
            !prefs.group_by_repo,
        ),
    };

    if let Some(kind) = tab.kind_filter() {
        for section in sections.values_mut() {
            section.retain(|n| n.kind == kind);
        }
    }

    TabContent {
        sections,
        show_repository,
    }
}

/// Number of rows in every tab, in tab order
pub fn tab_counts(
    items: &[Notification],
    prefs: &DisplayPreferences,
    username: &str,
) -> Vec<(InboxTab, usize)> {
    InboxTab::ALL
        .iter()
        .map(|&tab| (tab, derive_tab(tab, items, prefs, username).len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::NotificationStatus;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn pr(id: i64, repo: &str) -> Notification {
        Notification::new(id, NotificationKind::PullRequest, repo, format!("PR {}", id))
    }

    fn issue(id: i64, repo: &str) -> Notification {
        Notification::new(id, NotificationKind::Issue, repo, format!("Issue {}", id))
    }

    fn ids(items: &[&Notification]) -> Vec<i64> {
        items.iter().map(|n| n.id).collect()
    }

    fn sample() -> Vec<Notification> {
        vec![
            pr(1, "a").with_author("me"),
            issue(2, "b").with_status(NotificationStatus::Closed).with_author("me"),
            pr(3, "b").with_unread(false).with_review_requested(true),
            pr(4, "a").with_status(NotificationStatus::Merged).with_pinned(true),
            issue(5, "c").with_unread(false).with_pinned(true),
        ]
    }

    #[test]
    fn test_hide_closed_merged_scenario() {
        let items = vec![
            pr(1, "a"),
            pr(2, "a").with_status(NotificationStatus::Merged).with_unread(false),
        ];
        let prefs = DisplayPreferences {
            hide_closed_merged: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter_notifications(&items, &prefs)), vec![1]);
    }

    #[test]
    fn test_hide_closed_merged_excludes_done_items() {
        let items = sample();
        let prefs = DisplayPreferences {
            hide_closed_merged: true,
            ..Default::default()
        };
        let filtered = filter_notifications(&items, &prefs);
        assert!(filtered.iter().all(|n| n.status == NotificationStatus::Open));
        assert_eq!(ids(&filtered), vec![1, 3, 5]);
    }

    #[test]
    fn test_hide_read() {
        let items = sample();
        let prefs = DisplayPreferences {
            hide_read: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter_notifications(&items, &prefs)), vec![1, 2, 4]);

        let prefs = DisplayPreferences {
            hide_read: true,
            hide_closed_merged: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter_notifications(&items, &prefs)), vec![1]);
    }

    #[test]
    fn test_grouping_scenario() {
        let items = vec![pr(1, "a"), pr(2, "b")];
        let sections = group_notifications(items.iter().collect(), true);

        let keys: Vec<&str> = sections.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(ids(&sections["a"]), vec![1]);
        assert_eq!(ids(&sections["b"]), vec![2]);
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let items = sample();
        let filtered = filter_notifications(&items, &DisplayPreferences::default());
        let expected: HashSet<i64> = filtered.iter().map(|n| n.id).collect();
        let sections = group_notifications(filtered, true);

        // Bucket order is first appearance, item order is preserved
        let keys: Vec<&str> = sections.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(ids(&sections["a"]), vec![1, 4]);
        assert_eq!(ids(&sections["b"]), vec![2, 3]);

        let mut seen = HashSet::new();
        for (repo, bucket) in &sections {
            for item in bucket {
                assert_eq!(&item.repository, repo);
                assert!(seen.insert(item.id), "item {} in two buckets", item.id);
            }
        }
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_ungrouped_single_section() {
        let items = sample();
        let sections = group_notifications(items.iter().collect(), false);
        assert_eq!(sections.len(), 1);
        assert_eq!(ids(&sections[ALL_REPOSITORIES]), vec![1, 2, 3, 4, 5]);

        let sections = group_notifications(Vec::new(), false);
        assert!(sections[ALL_REPOSITORIES].is_empty());
    }

    #[test]
    fn test_categories_ignore_filters() {
        let items = sample();
        let prefs = DisplayPreferences {
            hide_closed_merged: true,
            hide_read: true,
            group_by_repo: true,
        };

        let content = derive_tab(InboxTab::Pinned, &items, &prefs, "me");
        assert_eq!(ids(&content.rows()), vec![4, 5]);
        assert!(content.show_repository);
        assert!(content.sections.contains_key("Pinned Items"));

        let content = derive_tab(InboxTab::MyIssues, &items, &prefs, "me");
        assert_eq!(ids(&content.rows()), vec![2]);

        let content = derive_tab(InboxTab::ReviewRequested, &items, &prefs, "me");
        assert_eq!(ids(&content.rows()), vec![3]);
    }

    #[test]
    fn test_mine_without_username_is_empty() {
        let items = vec![pr(1, "a")];
        assert!(my_pull_requests(&items, "").is_empty());
        assert!(derive_tab(InboxTab::MyPullRequests, &items, &DisplayPreferences::default(), "")
            .is_empty());
    }

    #[test]
    fn test_kind_filter_runs_after_grouping() {
        let items = sample();
        let prefs = DisplayPreferences {
            group_by_repo: true,
            ..Default::default()
        };

        let content = derive_tab(InboxTab::Issues, &items, &prefs, "me");
        // Repository "a" only holds pull requests but keeps its section
        let keys: Vec<&str> = content.sections.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert!(content.sections["a"].is_empty());
        assert_eq!(ids(&content.rows()), vec![2, 5]);
        assert!(!content.show_repository);
    }

    #[test]
    fn test_tab_counts() {
        let items = sample();
        let counts = tab_counts(&items, &DisplayPreferences::default(), "me");
        assert_eq!(
            counts,
            vec![
                (InboxTab::All, 5),
                (InboxTab::PullRequests, 3),
                (InboxTab::Issues, 2),
                (InboxTab::MyPullRequests, 1),
                (InboxTab::MyIssues, 1),
                (InboxTab::ReviewRequested, 1),
                (InboxTab::Pinned, 2),
            ]
        );
    }
}
