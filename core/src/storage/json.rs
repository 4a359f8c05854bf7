//! JSON document layer over a key-value store
//!
//! Storage failures stop here: reads degrade to `None` and writes report
//! `false`, with the cause logged.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::kv::KeyValueStore;

/// Reads and writes whole JSON documents by key
#[derive(Clone)]
pub struct JsonStore {
    backend: Arc<dyn KeyValueStore>,
}

impl JsonStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Load and decode the document under `key`
    ///
    /// Returns `None` when the key is absent, when the backend fails, or when
    /// the stored payload does not decode as `T`.
    pub async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get_item(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                error!("Failed to read {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Discarding corrupt document {}: {}", key, e);
                None
            }
        }
    }

    /// Encode `value` and replace the document under `key`
    ///
    /// Returns whether the write reached the backend.
    pub async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let content = match serde_json::to_string(value) {
            Ok(content) => content,
            Err(e) => {
                error!("Failed to serialize {}: {}", key, e);
                return false;
            }
        };

        match self.backend.set_item(key, content).await {
            Ok(()) => {
                debug!("Saved {}", key);
                true
            }
            Err(e) => {
                error!("Failed to save {}: {}", key, e);
                false
            }
        }
    }
}
