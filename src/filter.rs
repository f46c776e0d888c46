//! Status and text filtering of the task list.
//!
//! Pure functions; nothing here is persisted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterStatus {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterStatus {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterStatus::All => true,
            FilterStatus::Active => !task.completed,
            FilterStatus::Completed => task.completed,
        }
    }
}

impl fmt::Display for FilterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FilterStatus::All => "all",
            FilterStatus::Active => "active",
            FilterStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

impl FromStr for FilterStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterStatus::All),
            "active" => Ok(FilterStatus::Active),
            "completed" | "done" => Ok(FilterStatus::Completed),
            other => anyhow::bail!("Unknown status filter '{}'", other),
        }
    }
}

/// Tasks passing both the status filter and the text query, in their
/// original relative order.
///
/// The query is matched case-insensitively as a substring of the task text
/// and ignored when blank.
pub fn filter_tasks<'a>(tasks: &'a [Task], status: FilterStatus, query: &str) -> Vec<&'a Task> {
    let query = query.trim().to_lowercase();
    tasks
        .iter()
        .filter(|task| status.matches(task))
        .filter(|task| query.is_empty() || task.todo.to_lowercase().contains(&query))
        .collect()
}

/// Owned variant of [`filter_tasks`].
pub fn filter_tasks_owned(tasks: &[Task], status: FilterStatus, query: &str) -> Vec<Task> {
    filter_tasks(tasks, status, query).into_iter().cloned().collect()
}
