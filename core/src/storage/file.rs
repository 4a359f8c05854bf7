//! File-based key-value storage implementation
//!
//! Stores each key as its own JSON file inside a data directory.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

use super::kv::KeyValueStore;
use crate::{Error, Result};

/// File-backed key-value store
pub struct FileKeyValueStore {
    /// Directory holding one file per key
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new FileKeyValueStore rooted at `dir`
    ///
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(key)))
    }
}

/// Map a storage key onto a safe file stem, e.g. `@todo_app_tasks` -> `todo_app_tasks`
///
/// Distinct keys can share a stem (`@docs` and `docs`).
pub(crate) fn file_stem(key: &str) -> String {
    let stem: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = stem.trim_start_matches('_');
    if stem.is_empty() {
        "_".to_string()
    } else {
        stem.to_string()
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    async fn set_item(&self, key: &str, value: String) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            Error::Storage(format!("Failed to create directory: {}", e))
        })?;

        // Write to a sibling first so readers never see a partial document
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        if let Err(e) = tokio::fs::write(&tmp, value).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(Error::Storage(format!(
                "Failed to write {}: {}",
                tmp.display(),
                e
            )));
        }
        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(Error::Storage(format!(
                "Failed to replace {}: {}",
                path.display(),
                e
            )));
        }

        debug!("Wrote {}", path.display());
        Ok(())
    }
}
