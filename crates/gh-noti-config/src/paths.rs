//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gh-noti/`, `~/.cache/gh-noti/`
//! - macOS: `~/Library/Application Support/gh-noti/`, `~/Library/Caches/gh-noti/`
//! - Windows: `%APPDATA%\gh-noti\`, `%LOCALAPPDATA%\gh-noti\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "gh-noti";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory {:?}", dir))?;
    Ok(dir)
}

/// Get the application cache directory (log files live here in release builds)
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {:?}", dir))?;
    Ok(dir)
}

/// Get path to the display preferences file
pub fn preferences_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("preferences.toml"))
}
