//! Task filtering and ordering

use serde::{Deserialize, Serialize};

use crate::task::{Priority, Task};

/// Completion state to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    Completed,
    Active,
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

impl StatusFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Active => !task.completed,
        }
    }
}

/// Priority to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    All,
    Low,
    Medium,
    High,
}

impl Default for PriorityFilter {
    fn default() -> Self {
        Self::All
    }
}

impl PriorityFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Low => task.priority == Priority::Low,
            Self::Medium => task.priority == Priority::Medium,
            Self::High => task.priority == Priority::High,
        }
    }
}

impl From<Priority> for PriorityFilter {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => Self::Low,
            Priority::Medium => Self::Medium,
            Priority::High => Self::High,
        }
    }
}

/// Combination of task predicates; every set field must hold
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub priority: PriorityFilter,
    /// Case-insensitive text matched against title and description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Keep tasks carrying at least one of these tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: impl Into<PriorityFilter>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `task` satisfies every predicate of the filter
    pub fn matches(&self, task: &Task) -> bool {
        self.status.matches(task)
            && self.priority.matches(task)
            && self.matches_search(task)
            && self.matches_tags(task)
    }

    fn matches_search(&self, task: &Task) -> bool {
        let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) else {
            return true;
        };
        let needle = search.to_lowercase();
        task.title.to_lowercase().contains(&needle)
            || task
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    fn matches_tags(&self, task: &Task) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|tag| task.has_tag(tag))
    }
}

/// Sort newest first by creation time, keeping stored order for ties
pub fn sort_newest_first(tasks: &mut [Task]) {
    // sort_by is stable
    tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Tasks matching `filter`, newest first
pub fn view(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    let mut result: Vec<Task> = tasks.iter().filter(|t| filter.matches(t)).cloned().collect();
    sort_newest_first(&mut result);
    result
}
