//! Core library for the to-do app
//!
//! This crate contains everything below the screens:
//! - Persistence of the task collection and settings documents
//! - Task and settings repositories
//! - Filtering, ordering and dashboard statistics

pub mod config;
pub mod error;
pub mod logging;
pub mod query;
pub mod settings;
pub mod storage;
pub mod task;

use std::sync::Arc;

pub use config::StoreConfig;
pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

use settings::SettingsStore;
use storage::{FileKeyValueStore, JsonStore, KeyValueStore, MemoryKeyValueStore};
use task::TaskStore;

/// Task and settings repositories sharing one storage backend
pub struct TodoStorage {
    pub tasks: TaskStore,
    pub settings: SettingsStore,
}

impl TodoStorage {
    /// Repositories over an arbitrary backend
    pub fn with_backend(backend: Arc<dyn KeyValueStore>, config: &StoreConfig) -> Self {
        let store = JsonStore::new(backend);
        Self {
            tasks: TaskStore::with_key(store.clone(), config.tasks_key.clone()),
            settings: SettingsStore::with_key(store, config.settings_key.clone()),
        }
    }

    /// Repositories over files in `config.data_dir`
    pub fn open(config: &StoreConfig) -> Result<Self> {
        config.validate()?;
        tracing::info!("Using data directory: {:?}", config.data_dir);
        let backend = Arc::new(FileKeyValueStore::new(config.data_dir.clone()));
        Ok(Self::with_backend(backend, config))
    }

    /// Repositories that keep everything in memory
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryKeyValueStore::new()), &StoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{view, Dashboard, StatusFilter, TaskFilter};
    use crate::settings::{AppSettings, SettingsRepository};
    use crate::task::{Priority, Task, TaskDraft, TaskRepository};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_form_to_dashboard_flow() {
        let storage = TodoStorage::in_memory();
        let settings = storage.settings.get().await;

        let mut draft = TaskDraft::new(settings.default_priority);
        draft.title = "Buy milk".to_string();
        draft.add_tag("errand");
        let milk = draft.build(None).unwrap();
        storage.tasks.add(milk.clone()).await;

        let mut draft = TaskDraft::new(Priority::High);
        draft.title = "File taxes".to_string();
        let taxes = draft.build(None).unwrap();
        storage.tasks.add(taxes.clone()).await;

        assert!(storage.tasks.set_completed(&milk.id, true).await);

        let tasks = storage.tasks.get_all().await;
        let active = view(&tasks, &TaskFilter::new().with_status(StatusFilter::Active));
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, taxes.id);

        let dashboard = Dashboard::from_tasks(&tasks);
        assert_eq!(dashboard.stats.total, 2);
        assert_eq!(dashboard.stats.completed, 1);
        assert_eq!(dashboard.completion_percentage, 50);
        assert_eq!(dashboard.high_priority_tasks.len(), 1);
        assert_eq!(dashboard.high_priority_tasks[0].id, taxes.id);
    }

    #[tokio::test]
    async fn test_open_uses_data_dir() {
        let temp = TempDir::new().unwrap();
        let config = StoreConfig::new(temp.path());

        {
            let storage = TodoStorage::open(&config).unwrap();
            storage.tasks.add(Task::new("On disk").with_id("a")).await;
            storage
                .settings
                .set(AppSettings {
                    notifications_enabled: false,
                    ..AppSettings::default()
                })
                .await;
        }

        let storage = TodoStorage::open(&config).unwrap();
        assert_eq!(storage.tasks.get_all().await.len(), 1);
        assert!(!storage.settings.get().await.notifications_enabled);
        assert!(temp.path().join("todo_app_tasks.json").exists());
        assert!(temp.path().join("todo_app_settings.json").exists());
    }

    #[test]
    fn test_open_rejects_invalid_config() {
        let mut config = StoreConfig::new("unused");
        config.settings_key = config.tasks_key.clone();
        assert!(matches!(TodoStorage::open(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_open_rejects_keys_sharing_a_file() {
        let temp = TempDir::new().unwrap();
        let mut config = StoreConfig::new(temp.path());
        config.tasks_key = "@docs".to_string();
        config.settings_key = "docs".to_string();

        assert!(matches!(TodoStorage::open(&config), Err(Error::Config(_))));
        assert!(!temp.path().join("docs.json").exists());
    }
}
