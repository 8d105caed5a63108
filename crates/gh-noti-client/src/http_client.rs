//! reqwest-based backend client
//!
//! Direct implementation of the `NotificationBackend` trait over HTTP.

use crate::client::NotificationBackend;
use crate::error::{BackendError, Result};
use crate::types::{Thread, ThreadUpdate};
use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client, Response};
use std::time::Duration;
use url::Url;

const THREADS_ENDPOINT: &str = "/threads";
const FORCE_PULL_ENDPOINT: &str = "/forcePull";
const UPDATE_THREAD_ENDPOINT: &str = "/updateThread";

/// Backend client configuration
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Base URL of the backend (e.g. `http://localhost:5000`)
    pub base_url: Url,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HttpBackendConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: 30,
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// HTTP client for the notification backend
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: HttpBackendConfig,
}

impl HttpBackend {
    /// Create a new client
    pub fn new(config: HttpBackendConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BackendError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            endpoint
        )
    }

    /// Reject non-success responses
    fn check_status(endpoint: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(BackendError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl NotificationBackend for HttpBackend {
    async fn fetch_threads(&self) -> Result<Vec<Thread>> {
        debug!("Fetching threads from {}", self.config.base_url);

        let response = self
            .client
            .get(self.url(THREADS_ENDPOINT))
            .send()
            .await
            .map_err(|e| BackendError::network(THREADS_ENDPOINT, e))?;
        let response = Self::check_status(THREADS_ENDPOINT, response)?;

        let body = response
            .bytes()
            .await
            .map_err(|e| BackendError::network(THREADS_ENDPOINT, e))?;

        // An empty thread table is served as `null`
        let threads: Option<Vec<Thread>> =
            serde_json::from_slice(&body).map_err(|e| BackendError::Decode {
                endpoint: THREADS_ENDPOINT.to_string(),
                message: e.to_string(),
            })?;
        let threads = threads.unwrap_or_default();

        debug!("Fetched {} threads", threads.len());
        Ok(threads)
    }

    async fn force_pull(&self) -> Result<()> {
        debug!("Requesting force pull from {}", self.config.base_url);

        let response = self
            .client
            .post(self.url(FORCE_PULL_ENDPOINT))
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| BackendError::network(FORCE_PULL_ENDPOINT, e))?;
        Self::check_status(FORCE_PULL_ENDPOINT, response)?;
        Ok(())
    }

    async fn update_thread(&self, update: ThreadUpdate) -> Result<()> {
        debug!(
            "Sending {:?} for thread {}",
            update.action, update.thread_id
        );

        let response = self
            .client
            .post(self.url(UPDATE_THREAD_ENDPOINT))
            .json(&update)
            .send()
            .await
            .map_err(|e| BackendError::network(UPDATE_THREAD_ENDPOINT, e))?;
        Self::check_status(UPDATE_THREAD_ENDPOINT, response)?;
        Ok(())
    }
}
