//! Backend error types

use thiserror::Error;

/// Result alias used throughout the client
pub type Result<T> = std::result::Result<T, BackendError>;

/// Errors raised while talking to the notification backend
///
/// `Network`, `Status` and `Decode` mean the remote call failed; callers treat
/// them uniformly as a network failure and keep their previous state.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Backend unreachable, connection dropped or request timed out
    #[error("Network error calling {endpoint}: {source}")]
    Network {
        endpoint: String,
        /// The connection was never established, so the request was not sent
        connect: bool,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// Response body did not match the contract
    #[error("Failed to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl BackendError {
    pub(crate) fn network(endpoint: &str, source: reqwest::Error) -> Self {
        Self::Network {
            endpoint: endpoint.to_string(),
            connect: source.is_connect(),
            source,
        }
    }

    /// Whether the backend certainly never saw the request
    pub fn never_sent(&self) -> bool {
        matches!(
            self,
            Self::Network { connect: true, .. } | Self::Client(_)
        )
    }

    /// Whether this error is a failed remote call
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Status { .. } | Self::Decode { .. }
        )
    }

    /// Whether retrying the same request could succeed
    ///
    /// Client errors (4xx) and decode failures will not change on retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::Decode { .. } | Self::Client(_) => false,
        }
    }
}
