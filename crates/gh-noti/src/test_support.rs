//! Shared test doubles

use async_trait::async_trait;
use gh_noti_client::{
    BackendError, NotificationBackend, Result, Thread, ThreadKind, ThreadStatus, ThreadUpdate,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory backend that records what it was asked to do
#[derive(Default)]
pub struct FakeBackend {
    pub threads: Mutex<Vec<Thread>>,
    pub fail: AtomicBool,
    /// Fail only `/forcePull`
    pub fail_force_pull: AtomicBool,
    pub fetches: AtomicUsize,
    pub force_pulls: AtomicUsize,
    pub updates: Mutex<Vec<ThreadUpdate>>,
}

impl FakeBackend {
    pub fn with_threads(threads: Vec<Thread>) -> Self {
        Self {
            threads: Mutex::new(threads),
            ..Default::default()
        }
    }

    fn check(&self, endpoint: &str) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(BackendError::Status {
                endpoint: endpoint.to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationBackend for FakeBackend {
    async fn fetch_threads(&self) -> Result<Vec<Thread>> {
        self.check("/threads")?;
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.threads.lock().unwrap().clone())
    }

    async fn force_pull(&self) -> Result<()> {
        self.check("/forcePull")?;
        if self.fail_force_pull.load(Ordering::SeqCst) {
            return Err(BackendError::Status {
                endpoint: "/forcePull".to_string(),
                status: 502,
            });
        }
        self.force_pulls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn update_thread(&self, update: ThreadUpdate) -> Result<()> {
        self.check("/updateThread")?;
        self.updates.lock().unwrap().push(update);
        Ok(())
    }
}

pub fn thread(id: i64, title: &str) -> Thread {
    Thread {
        id,
        kind: ThreadKind::PullRequest,
        repository: "octo/hello".to_string(),
        title: title.to_string(),
        status: ThreadStatus::Open,
        pinned: false,
        author: "octocat".to_string(),
        review_requested: false,
        url: format!("https://github.com/octo/hello/pull/{}", id),
        unread: true,
        updated_at: None,
        activity: Vec::new(),
    }
}
