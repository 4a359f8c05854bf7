//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::Task;

/// Repository interface for task CRUD operations
///
/// Storage failures never surface here: reads fall back to an empty
/// collection and failed writes are logged by the store.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Get all tasks in stored order
    async fn get_all(&self) -> Vec<Task>;

    /// Get a task by ID
    async fn get(&self, id: &str) -> Option<Task>;

    /// Append a task; the caller supplies a unique id
    async fn add(&self, task: Task);

    /// Replace the task with the same ID, returns false if none matched
    async fn update(&self, task: Task) -> bool;

    /// Delete a task by ID, returns false if none matched
    async fn delete(&self, id: &str) -> bool;

    /// Set the completion flag and refresh `updated_at`, returns false if none matched
    async fn set_completed(&self, id: &str, completed: bool) -> bool;
}
