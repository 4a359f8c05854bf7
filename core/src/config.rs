//! Storage configuration

use std::env::{self, VarError};
use std::path::PathBuf;

use crate::storage::{file_stem, SETTINGS_KEY, TASKS_KEY};
use crate::{Error, Result};

pub const DATA_DIR_ENV: &str = "TODO_DATA_DIR";
pub const TASKS_KEY_ENV: &str = "TODO_TASKS_KEY";
pub const SETTINGS_KEY_ENV: &str = "TODO_SETTINGS_KEY";

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = ".todo-data";

/// Where and under which keys the documents are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub tasks_key: String,
    pub settings_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl StoreConfig {
    /// Config for `data_dir` with the standard keys
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            tasks_key: TASKS_KEY.to_string(),
            settings_key: SETTINGS_KEY.to_string(),
        }
    }

    /// Config from the process environment, defaults for unset or blank values
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let read = |name: &str| -> Result<Option<String>> {
            match lookup(name) {
                Ok(raw) => {
                    let trimmed = raw.trim();
                    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
                }
                Err(VarError::NotPresent) => Ok(None),
                Err(VarError::NotUnicode(_)) => {
                    Err(Error::Config(format!("{} is not valid unicode", name)))
                }
            }
        };

        let mut config = Self::new(
            read(DATA_DIR_ENV)?.unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()),
        );
        if let Some(key) = read(TASKS_KEY_ENV)? {
            config.tasks_key = key;
        }
        if let Some(key) = read(SETTINGS_KEY_ENV)? {
            config.settings_key = key;
        }
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make the two documents collide
    pub fn validate(&self) -> Result<()> {
        if self.tasks_key.trim().is_empty() || self.settings_key.trim().is_empty() {
            return Err(Error::Config("storage keys cannot be empty".to_string()));
        }
        // Keys that differ only in characters the file backend replaces
        // still land in the same file
        if file_stem(&self.tasks_key) == file_stem(&self.settings_key) {
            return Err(Error::Config(format!(
                "tasks key {} and settings key {} map to the same document",
                self.tasks_key, self.settings_key
            )));
        }
        Ok(())
    }
}
