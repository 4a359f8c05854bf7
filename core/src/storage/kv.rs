//! Key-value storage trait
//!
//! Defines the interface for raw document storage.

use async_trait::async_trait;

use crate::Result;

/// Local key-value storage holding one serialized document per key
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, `None` if the key was never written
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    async fn set_item(&self, key: &str, value: String) -> Result<()>;
}
