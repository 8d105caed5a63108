use std::{
    env,
    path::{Path, PathBuf},
};

const CONFIG_FILE: &str = ".gh-noti.toml";

/// Load config file content from CWD first, then home directory
///
/// Searches for `.gh-noti.toml` in:
/// 1. Current working directory
/// 2. Home directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home_config) = get_home_config_path() {
        candidates.push(home_config);
    }
    read_first(&candidates).map(|(_, content)| content)
}

/// Read the first candidate that exists and is readable
fn read_first(candidates: &[PathBuf]) -> Option<(&Path, String)> {
    candidates.iter().find_map(|path| {
        let content = std::fs::read_to_string(path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some((path.as_path(), content))
    })
}

fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
