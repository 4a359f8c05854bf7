//! Task form input
//!
//! Collects user input for a new or edited task and turns it into a `Task`,
//! rejecting input the repository must never see.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::model::{Priority, Task};
use crate::{Error, Result};

/// Editable form state for a task
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
}

impl TaskDraft {
    /// Empty draft seeded with the user's default priority
    pub fn new(default_priority: Priority) -> Self {
        Self {
            priority: default_priority,
            ..Self::default()
        }
    }

    /// Draft pre-filled from an existing task for editing
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority,
            due_date: task.due_date,
            tags: task.tags.clone(),
        }
    }

    /// Add a tag; blank or already present tags are ignored
    ///
    /// Returns whether the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove a tag if present
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Build the task to save
    ///
    /// When `editing` is given, its id, completion state and creation time
    /// carry over; otherwise a fresh id is generated.
    pub fn build(&self, editing: Option<&Task>) -> Result<Task> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("Task title cannot be empty".to_string()));
        }

        let description = self.description.trim();
        let now = Utc::now();

        let (id, completed, created_at) = match editing {
            Some(task) => (task.id.clone(), task.completed, task.created_at),
            None => (Uuid::new_v4().to_string(), false, now),
        };

        Ok(Task {
            id,
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            completed,
            priority: self.priority,
            due_date: self.due_date,
            tags: self.tags.clone(),
            created_at,
            updated_at: now.max(created_at),
        })
    }
}
