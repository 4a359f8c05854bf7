//! Settings persistence

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::model::{AppSettings, SettingsPatch};
use crate::storage::{JsonStore, SETTINGS_KEY};

/// Repository interface for the settings singleton
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Current settings, defaults if none are stored or they cannot be read
    async fn get(&self) -> AppSettings;

    /// Replace the stored settings
    async fn set(&self, settings: AppSettings);

    /// Apply a partial change and return the resulting settings
    async fn update(&self, patch: SettingsPatch) -> AppSettings;

    /// Store and return the default settings
    async fn reset(&self) -> AppSettings;
}

/// Settings stored under a single key
pub struct SettingsStore {
    store: JsonStore,
    key: String,
    write_lock: Mutex<()>,
}

impl SettingsStore {
    /// Create a SettingsStore using the default settings key
    pub fn new(store: JsonStore) -> Self {
        Self::with_key(store, SETTINGS_KEY)
    }

    /// Create a SettingsStore reading and writing `key`
    pub fn with_key(store: JsonStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    async fn load(&self) -> AppSettings {
        self.store.read(&self.key).await.unwrap_or_default()
    }
}

#[async_trait]
impl SettingsRepository for SettingsStore {
    async fn get(&self) -> AppSettings {
        self.load().await
    }

    async fn set(&self, settings: AppSettings) {
        let _guard = self.write_lock.lock().await;
        self.store.write(&self.key, &settings).await;
    }

    async fn update(&self, patch: SettingsPatch) -> AppSettings {
        let _guard = self.write_lock.lock().await;
        let next = patch.apply(&self.load().await);
        self.store.write(&self.key, &next).await;
        next
    }

    async fn reset(&self) -> AppSettings {
        let _guard = self.write_lock.lock().await;
        let defaults = AppSettings::default();
        debug!("Resetting settings");
        self.store.write(&self.key, &defaults).await;
        defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeyValueStore;
    use crate::task::Priority;
    use std::sync::Arc;

    fn create_test_store() -> (SettingsStore, Arc<MemoryKeyValueStore>) {
        let backend = Arc::new(MemoryKeyValueStore::new());
        let store = SettingsStore::new(JsonStore::new(backend.clone()));
        (store, backend)
    }

    #[tokio::test]
    async fn test_get_defaults_when_absent() {
        let (store, backend) = create_test_store();

        assert_eq!(store.get().await, AppSettings::default());
        // Reading does not write anything
        assert!(backend.raw(SETTINGS_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_set_replaces() {
        let (store, _backend) = create_test_store();
        let custom = AppSettings {
            show_completed_tasks: false,
            default_priority: Priority::High,
            notifications_enabled: false,
        };

        store.set(custom).await;
        assert_eq!(store.get().await, custom);
    }

    #[tokio::test]
    async fn test_reset_after_set() {
        let (store, _backend) = create_test_store();
        store
            .set(AppSettings {
                show_completed_tasks: false,
                default_priority: Priority::Low,
                notifications_enabled: false,
            })
            .await;

        assert_eq!(store.reset().await, AppSettings::default());

        let settings = store.get().await;
        assert!(settings.show_completed_tasks);
        assert_eq!(settings.default_priority, Priority::Medium);
        assert!(settings.notifications_enabled);
    }

    #[tokio::test]
    async fn test_update_one_field() {
        let (store, _backend) = create_test_store();

        let next = store
            .update(SettingsPatch::default().notifications_enabled(false))
            .await;
        assert!(!next.notifications_enabled);
        assert!(next.show_completed_tasks);

        let next = store
            .update(SettingsPatch::default().show_completed_tasks(false))
            .await;
        assert!(!next.notifications_enabled);
        assert!(!next.show_completed_tasks);
        assert_eq!(store.get().await, next);
    }

    #[tokio::test]
    async fn test_corrupt_settings_read_as_defaults() {
        let (store, backend) = create_test_store();
        backend
            .insert_raw(SETTINGS_KEY, r#"{"showCompletedTasks": "yes"}"#)
            .await;

        assert_eq!(store.get().await, AppSettings::default());
    }

    #[tokio::test]
    async fn test_unavailable_storage() {
        let (store, backend) = create_test_store();
        store
            .set(AppSettings {
                default_priority: Priority::High,
                ..AppSettings::default()
            })
            .await;

        backend.set_fail_reads(true);
        assert_eq!(store.get().await, AppSettings::default());

        backend.set_fail_reads(false);
        backend.set_fail_writes(true);
        // Reset still hands back defaults even though nothing was saved
        assert_eq!(store.reset().await, AppSettings::default());
        backend.set_fail_writes(false);
        assert_eq!(store.get().await.default_priority, Priority::High);
    }
}
