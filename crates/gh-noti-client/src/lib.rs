//! Client for the gh-noti notification backend
//!
//! This crate provides a trait-based client for the small HTTP contract the
//! notification backend exposes, plus a queue that delivers local state
//! changes to it eventually.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │           NotificationBackend trait              │
//! │  - fetch_threads()      GET  /threads            │
//! │  - force_pull()         POST /forcePull          │
//! │  - update_thread()      POST /updateThread       │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │  HttpBackend    │◄────────│  SyncQueue worker   │
//! │  (reqwest)      │         │  (retry + backoff)  │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_noti_client::{HttpBackend, HttpBackendConfig, NotificationBackend};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let base_url = "http://localhost:5000".parse()?;
//! let backend = HttpBackend::new(HttpBackendConfig::new(base_url))?;
//! let threads = backend.fetch_threads().await?;
//! println!("{} threads", threads.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod sync_queue;
pub mod types;

pub use client::NotificationBackend;
pub use error::{BackendError, Result};
pub use http_client::{HttpBackend, HttpBackendConfig};
pub use sync_queue::{SyncPolicy, SyncQueue, SyncStats};
pub use types::{Thread, ThreadAction, ThreadActivity, ThreadKind, ThreadStatus, ThreadUpdate};
