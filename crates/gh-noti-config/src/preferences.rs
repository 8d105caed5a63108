//! Display preference persistence
//!
//! A small key-value store backed by a TOML file in the config directory.
//! Storage problems never reach the caller: an unreadable or unparsable file
//! and failed writes fall back to values kept for the current session only.

use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

use crate::paths;

/// Key-value store for UI preferences
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    /// Backing file; `None` once storage is unavailable
    path: Option<PathBuf>,
    values: Table,
}

impl PreferenceStore {
    /// Open the store in the user config directory
    pub fn open() -> Self {
        match paths::preferences_path() {
            Ok(path) => Self::at(path),
            Err(e) => {
                log::debug!("Preferences not persisted: {:#}", e);
                Self::in_memory()
            }
        }
    }

    /// Open the store backed by a specific file
    ///
    /// A missing file is an empty store that will be created on first write.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::read(&path) {
            Ok(values) => Self {
                path: Some(path),
                values,
            },
            Err(e) => {
                log::debug!("Preferences at {:?} unavailable, using session only: {}", path, e);
                Self::in_memory()
            }
        }
    }

    /// Store that forgets everything at exit
    pub fn in_memory() -> Self {
        Self::default()
    }

    fn read(path: &Path) -> Result<Table, String> {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str::<Table>(&content).map_err(|e| e.to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Table::new()),
            Err(e) => Err(e.to_string()),
        }
    }

    /// Whether writes reach the disk
    pub fn is_persistent(&self) -> bool {
        self.path.is_some()
    }

    /// Stored value for `key`, or `default` if absent or of another type
    ///
    /// Reading never writes the default back.
    pub fn get<T>(&self, key: &str, default: T) -> T
    where
        T: DeserializeOwned,
    {
        self.values
            .get(key)
            .and_then(|value| value.clone().try_into().ok())
            .unwrap_or(default)
    }

    /// Store `value` under `key` and persist the whole store
    pub fn set<T>(&mut self, key: &str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        match Value::try_from(value) {
            Ok(value) => {
                self.values.insert(key.to_string(), value);
            }
            Err(e) => {
                log::debug!("Preference {} not storable: {}", key, e);
                return;
            }
        }
        self.flush();
    }

    fn flush(&mut self) {
        let Some(path) = &self.path else {
            return;
        };

        let result = toml::to_string(&self.values)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).map_err(|e| e.to_string())?;
                }
                fs::write(path, content).map_err(|e| e.to_string())
            });

        if let Err(e) = result {
            log::debug!("Failed to write preferences to {:?}, keeping them for this session: {}", path, e);
            self.path = None;
        }
    }
}
