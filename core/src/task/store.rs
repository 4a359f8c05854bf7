//! Task repository backed by the JSON document store
//!
//! The whole collection is one document: every mutation reads it, applies
//! the change, and writes it back.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::model::Task;
use super::repository::TaskRepository;
use crate::storage::{JsonStore, TASKS_KEY};

/// Task collection stored under a single key
pub struct TaskStore {
    store: JsonStore,
    key: String,
    /// Serializes read-modify-write cycles issued through this instance
    write_lock: Mutex<()>,
}

impl TaskStore {
    /// Create a TaskStore using the default tasks key
    pub fn new(store: JsonStore) -> Self {
        Self::with_key(store, TASKS_KEY)
    }

    /// Create a TaskStore reading and writing `key`
    pub fn with_key(store: JsonStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Storage key of the collection
    pub fn key(&self) -> &str {
        &self.key
    }

    async fn load(&self) -> Vec<Task> {
        self.store.read(&self.key).await.unwrap_or_default()
    }

    async fn save(&self, tasks: &[Task]) -> bool {
        self.store.write(&self.key, tasks).await
    }
}

#[async_trait]
impl TaskRepository for TaskStore {
    async fn get_all(&self) -> Vec<Task> {
        self.load().await
    }

    async fn get(&self, id: &str) -> Option<Task> {
        self.load().await.into_iter().find(|t| t.id == id)
    }

    async fn add(&self, task: Task) {
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.load().await;
        debug!("Adding task {}", task.id);
        tasks.push(task);
        self.save(&tasks).await;
    }

    async fn update(&self, task: Task) -> bool {
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.load().await;
        let Some(slot) = tasks.iter_mut().find(|t| t.id == task.id) else {
            debug!("Update skipped, no task {}", task.id);
            return false;
        };
        *slot = task;
        self.save(&tasks).await;
        true
    }

    async fn delete(&self, id: &str) -> bool {
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.load().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            debug!("Delete skipped, no task {}", id);
            return false;
        }
        self.save(&tasks).await;
        true
    }

    async fn set_completed(&self, id: &str, completed: bool) -> bool {
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.load().await;
        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            debug!("Completion skipped, no task {}", id);
            return false;
        };
        task.completed = completed;
        task.touch();
        self.save(&tasks).await;
        true
    }
}
