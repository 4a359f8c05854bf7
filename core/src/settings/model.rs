//! Settings model definitions

use serde::{Deserialize, Serialize};

use crate::task::Priority;

/// User preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub show_completed_tasks: bool,
    /// Priority new tasks start with in the form
    pub default_priority: Priority,
    pub notifications_enabled: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_completed_tasks: true,
            default_priority: Priority::Medium,
            notifications_enabled: true,
        }
    }
}

/// Partial settings change; `None` fields are left as they are
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_completed_tasks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications_enabled: Option<bool>,
}

impl SettingsPatch {
    pub fn show_completed_tasks(mut self, value: bool) -> Self {
        self.show_completed_tasks = Some(value);
        self
    }

    pub fn default_priority(mut self, value: Priority) -> Self {
        self.default_priority = Some(value);
        self
    }

    pub fn notifications_enabled(mut self, value: bool) -> Self {
        self.notifications_enabled = Some(value);
        self
    }

    /// Settings with every present field of this patch applied
    pub fn apply(&self, current: &AppSettings) -> AppSettings {
        let mut next = *current;
        if let Some(value) = self.show_completed_tasks {
            next.show_completed_tasks = value;
        }
        if let Some(value) = self.default_priority {
            next.default_priority = value;
        }
        if let Some(value) = self.notifications_enabled {
            next.notifications_enabled = value;
        }
        next
    }
}
