//! Application configuration
//!
//! Loaded from `.gh-noti.toml` (CWD, then home directory) and then
//! overridden by environment variables, which may come from a `.env` file.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Overrides `backend_url`
pub const ENV_BACKEND_URL: &str = "GH_NOTI_BACKEND_URL";
/// Overrides `username`
pub const ENV_USERNAME: &str = "GH_NOTI_USERNAME";

/// Application configuration loaded from `.gh-noti.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the notification backend
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// GitHub username used for the "by me" tabs
    #[serde(default)]
    pub username: String,

    /// Seconds between automatic refreshes
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Attempts per outbound update before it is dropped
    #[serde(default = "default_sync_max_attempts")]
    pub sync_max_attempts: u32,

    /// Initial retry delay for outbound updates, in milliseconds
    #[serde(default = "default_sync_retry_base_ms")]
    pub sync_retry_base_ms: u64,
}

fn default_backend_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_poll_interval_secs() -> u64 {
    300
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_sync_max_attempts() -> u32 {
    3
}

fn default_sync_retry_base_ms() -> u64 {
    500
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            username: String::new(),
            poll_interval_secs: default_poll_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            sync_max_attempts: default_sync_max_attempts(),
            sync_retry_base_ms: default_sync_retry_base_ms(),
        }
    }
}

impl AppConfig {
    /// Load config from file (or defaults), then apply environment overrides
    pub fn load() -> Self {
        let mut config = Self::from_file_content(crate::load_config_file());

        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => log::warn!("Failed to load .env file: {}", e),
        }

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    fn from_file_content(content: Option<String>) -> Self {
        if let Some(content) = content {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Apply overrides looked up by environment variable name
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_BACKEND_URL) {
            log::debug!("Backend URL overridden by {}", ENV_BACKEND_URL);
            self.backend_url = url.trim().to_string();
        }
        if let Some(username) = non_empty(ENV_USERNAME) {
            log::debug!("Username overridden by {}", ENV_USERNAME);
            self.username = username.trim().to_string();
        }
    }

    /// Reject configurations the application cannot run with
    pub fn validate(&self) -> Result<()> {
        self.backend_url()?;
        if self.poll_interval_secs == 0 {
            bail!("poll_interval_secs must be greater than zero");
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// Parsed backend URL; only http(s) URLs with a host are accepted
    pub fn backend_url(&self) -> Result<Url> {
        let url = Url::parse(self.backend_url.trim())
            .with_context(|| format!("Invalid backend URL {:?}", self.backend_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!(
                "Invalid backend URL {:?}: expected an http:// or https:// URL",
                self.backend_url
            );
        }
        if url.host_str().is_none() {
            bail!("Invalid backend URL {:?}: missing host", self.backend_url);
        }
        Ok(url)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn sync_retry_base(&self) -> Duration {
        Duration::from_millis(self.sync_retry_base_ms)
    }

    /// Whether the "by me" tabs can match anything
    pub fn has_username(&self) -> bool {
        !self.username.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url, "http://localhost:5000");
        assert!(config.username.is_empty());
        assert!(!config.has_username());
        assert_eq!(config.poll_interval(), Duration::from_millis(300_000));
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.sync_max_attempts, 3);
        assert_eq!(config.sync_retry_base(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            backend_url = "https://noti.example.com"
            username = "octocat"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.backend_url, "https://noti.example.com");
        assert_eq!(config.username, "octocat");
        // Other fields should use defaults
        assert_eq!(config.poll_interval_secs, 300);
        assert_eq!(config.sync_max_attempts, 3);
    }

    #[test]
    fn test_unparsable_file_falls_back_to_defaults() {
        let config = AppConfig::from_file_content(Some("backend_url = [".to_string()));
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_file_content(None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = AppConfig::from_file_content(Some(
            "backend_url = \"http://file:5000\"\nusername = \"file-user\"".to_string(),
        ));
        let env: HashMap<&str, &str> = [
            (ENV_BACKEND_URL, " http://env:8080 "),
            (ENV_USERNAME, ""),
        ]
        .into_iter()
        .collect();

        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend_url, "http://env:8080");
        // Empty override is ignored
        assert_eq!(config.username, "file-user");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = AppConfig {
            backend_url: "localhost:5000".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            backend_url: "http://".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            poll_interval_secs: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_backend_urls_are_rejected() {
        for url in [
            "http://local host:5000",
            "http://:5000",
            "http://exa mple.com",
            "https://[::1",
            "ftp://localhost",
            "",
        ] {
            let config = AppConfig {
                backend_url: url.to_string(),
                ..AppConfig::default()
            };
            assert!(config.validate().is_err(), "{url:?} was accepted");
        }
    }

    #[test]
    fn test_backend_url_is_parsed() {
        let config = AppConfig {
            backend_url: " https://noti.example.com/api ".to_string(),
            ..AppConfig::default()
        };
        let url = config.backend_url().unwrap();
        assert_eq!(url.host_str(), Some("noti.example.com"));
        assert_eq!(url.path(), "/api");

        let config = AppConfig {
            backend_url: "http://[::1]:5000".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.backend_url().unwrap().port(), Some(5000));
    }
}
