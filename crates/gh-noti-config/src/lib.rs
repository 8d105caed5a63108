//! Configuration and file management for gh-noti
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML, with environment overrides)
//! - Application configuration (AppConfig)
//! - Persistent key-value storage for display preferences

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod preferences;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use preferences::PreferenceStore;
