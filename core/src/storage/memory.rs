//! In-memory key-value storage
//!
//! Used by tests and by hosts that do not need data to outlive the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use super::kv::KeyValueStore;
use crate::{Error, Result};

/// Key-value store held entirely in memory
#[derive(Default)]
pub struct MemoryKeyValueStore {
    items: RwLock<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent read fail as if storage were unavailable
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent write fail as if storage were unavailable
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw value under `key`, bypassing failure injection
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.items.read().await.get(key).cloned()
    }

    /// Store a raw value under `key`, bypassing failure injection
    pub async fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.items.write().await.insert(key.into(), value.into());
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Error::Storage(format!("Storage unavailable reading {}", key)));
        }
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Storage(format!("Storage unavailable writing {}", key)));
        }
        self.items.write().await.insert(key.to_string(), value);
        Ok(())
    }
}
