//! Home dashboard aggregates

use serde::Serialize;

use super::filter::sort_newest_first;
use crate::task::{Priority, Task};

/// Number of tasks shown in each dashboard list
pub const DASHBOARD_LIST_LIMIT: usize = 3;

/// Completion counts over a task collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
        }
    }

    /// Share of completed tasks as a rounded percentage, 0 for no tasks
    pub fn completion_percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.completed as f64 / self.total as f64 * 100.0).round() as u32
    }
}

/// Most recently created tasks across the whole collection
pub fn recent_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut recent = tasks.to_vec();
    sort_newest_first(&mut recent);
    recent.truncate(limit);
    recent
}

/// Most recently created high priority tasks that are still open
pub fn high_priority_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut open: Vec<Task> = tasks
        .iter()
        .filter(|t| t.priority == Priority::High && !t.completed)
        .cloned()
        .collect();
    sort_newest_first(&mut open);
    open.truncate(limit);
    open
}

/// Everything the home screen shows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: TaskStats,
    pub completion_percentage: u32,
    pub recent_tasks: Vec<Task>,
    pub high_priority_tasks: Vec<Task>,
}

impl Dashboard {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let stats = TaskStats::from_tasks(tasks);
        Self {
            stats,
            completion_percentage: stats.completion_percentage(),
            recent_tasks: recent_tasks(tasks, DASHBOARD_LIST_LIMIT),
            high_priority_tasks: high_priority_tasks(tasks, DASHBOARD_LIST_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    fn task(id: &str, minutes: i64, priority: Priority, completed: bool) -> Task {
        let created = "2024-05-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
            + Duration::minutes(minutes);
        let mut task = Task::new(id)
            .with_id(id)
            .with_priority(priority)
            .created_at(created);
        task.completed = completed;
        task
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_empty_collection() {
        let dashboard = Dashboard::from_tasks(&[]);
        assert_eq!(dashboard.stats, TaskStats::default());
        assert_eq!(dashboard.completion_percentage, 0);
        assert!(dashboard.recent_tasks.is_empty());
        assert!(dashboard.high_priority_tasks.is_empty());
    }

    #[test]
    fn test_stats() {
        let tasks = vec![
            task("a", 1, Priority::Low, true),
            task("b", 2, Priority::Low, false),
            task("c", 3, Priority::Low, false),
        ];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.completion_percentage(), 33);
    }

    #[test]
    fn test_completion_percentage_rounding() {
        let stats = TaskStats {
            total: 3,
            completed: 2,
            pending: 1,
        };
        assert_eq!(stats.completion_percentage(), 67);

        let stats = TaskStats {
            total: 8,
            completed: 1,
            pending: 7,
        };
        // 12.5 rounds up
        assert_eq!(stats.completion_percentage(), 13);
    }

    #[test]
    fn test_all_completed_is_full() {
        let tasks = vec![
            task("a", 1, Priority::Low, true),
            task("b", 2, Priority::High, true),
        ];
        assert_eq!(TaskStats::from_tasks(&tasks).completion_percentage(), 100);
    }

    #[test]
    fn test_recent_ignores_status_and_priority() {
        let tasks = vec![
            task("a", 1, Priority::Low, false),
            task("b", 5, Priority::High, true),
            task("c", 3, Priority::Medium, false),
            task("d", 4, Priority::Low, true),
            task("e", 2, Priority::High, false),
        ];
        let dashboard = Dashboard::from_tasks(&tasks);
        assert_eq!(ids(&dashboard.recent_tasks), vec!["b", "d", "c"]);
    }

    #[test]
    fn test_high_priority_only_open_tasks() {
        let tasks = vec![
            task("a", 1, Priority::High, false),
            task("b", 2, Priority::High, true),
            task("c", 3, Priority::High, false),
            task("d", 4, Priority::Medium, false),
            task("e", 5, Priority::High, false),
            task("f", 6, Priority::High, false),
        ];
        let dashboard = Dashboard::from_tasks(&tasks);
        assert_eq!(ids(&dashboard.high_priority_tasks), vec!["f", "e", "c"]);
    }

    #[test]
    fn test_fewer_than_limit() {
        let tasks = vec![task("a", 1, Priority::High, false)];
        assert_eq!(ids(&recent_tasks(&tasks, 3)), vec!["a"]);
        assert_eq!(ids(&high_priority_tasks(&tasks, 3)), vec!["a"]);
    }
}
