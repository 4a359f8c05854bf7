//! Persistence store
//!
//! Raw key-value backends plus the JSON document layer the repositories
//! read and write through.

mod file;
mod json;
mod kv;
mod memory;

pub use file::FileKeyValueStore;
pub(crate) use file::file_stem;
pub use json::JsonStore;
pub use kv::KeyValueStore;
pub use memory::MemoryKeyValueStore;

/// Storage key of the task collection document
pub const TASKS_KEY: &str = "@todo_app_tasks";

/// Storage key of the settings document
pub const SETTINGS_KEY: &str = "@todo_app_settings";
