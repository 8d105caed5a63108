//! Notification backend trait
//!
//! This module defines the `NotificationBackend` trait that all backend
//! implementations must satisfy.

use crate::error::Result;
use crate::types::{Thread, ThreadUpdate};
use async_trait::async_trait;

/// Notification backend trait
///
/// Defines the interface for the remote notification backend.
/// Implementations can be direct (hitting the HTTP API) or test doubles.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_noti_client::{NotificationBackend, Thread};
///
/// async fn unread(backend: &dyn NotificationBackend) -> gh_noti_client::Result<Vec<Thread>> {
///     let threads = backend.fetch_threads().await?;
///     Ok(threads.into_iter().filter(|t| t.unread).collect())
/// }
/// ```
#[async_trait]
pub trait NotificationBackend: Send + Sync {
    /// Fetch every thread the backend currently knows about
    ///
    /// The order of the returned list is the display order.
    async fn fetch_threads(&self) -> Result<Vec<Thread>>;

    /// Ask the backend to re-pull notifications from GitHub
    ///
    /// Returns once the backend acknowledged the request; the refreshed
    /// threads must be fetched separately.
    async fn force_pull(&self) -> Result<()>;

    /// Report a local state change for a thread
    async fn update_thread(&self, update: ThreadUpdate) -> Result<()>;
}
