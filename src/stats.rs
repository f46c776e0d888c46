//! Summary statistics over the task list.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::entities::category::{UNCATEGORIZED_COLOR, UNCATEGORIZED_NAME};
use crate::sync::TaskSnapshot;
use crate::utils::datetime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub color: String,
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStatistics {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    /// Whole percent, 0 for an empty list
    pub completion_rate: u32,
    /// Only categories holding at least one task, uncategorized last
    pub by_category: Vec<CategoryStats>,
    pub overdue: usize,
    pub due_today: usize,
    /// Due after today and at most seven days out
    pub due_this_week: usize,
    pub with_due_date: usize,
    pub without_due_date: usize,
}

/// Compute statistics relative to `today`.
///
/// Due-date counts only consider active tasks. Assignments for tasks that no
/// longer exist are ignored; tasks pointing at a deleted category count as
/// uncategorized.
pub fn compute(snapshot: &TaskSnapshot, today: NaiveDate) -> TaskStatistics {
    let tasks = &snapshot.tasks;
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let active = total - completed;
    let completion_rate = if total > 0 {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    let known: HashSet<&str> = snapshot.categories.iter().map(|c| c.id.as_str()).collect();
    let category_of = |task_id: u64| {
        snapshot
            .task_categories
            .get(&task_id)
            .map(String::as_str)
            .filter(|id| known.contains(id))
    };

    let mut by_category: Vec<CategoryStats> = snapshot
        .categories
        .iter()
        .map(|category| {
            let (total, completed) = tasks
                .iter()
                .filter(|t| category_of(t.id) == Some(category.id.as_str()))
                .fold((0usize, 0usize), |(n, done), t| (n + 1, done + usize::from(t.completed)));
            CategoryStats {
                category: category.name.clone(),
                color: category.color.clone(),
                total,
                completed,
                active: total - completed,
            }
        })
        .collect();

    let (uncategorized, uncategorized_done) = tasks
        .iter()
        .filter(|t| category_of(t.id).is_none())
        .fold((0usize, 0usize), |(n, done), t| (n + 1, done + usize::from(t.completed)));
    by_category.push(CategoryStats {
        category: UNCATEGORIZED_NAME.to_string(),
        color: UNCATEGORIZED_COLOR.to_string(),
        total: uncategorized,
        completed: uncategorized_done,
        active: uncategorized - uncategorized_done,
    });
    by_category.retain(|c| c.total > 0);

    let active_due: Vec<NaiveDate> = tasks
        .iter()
        .filter(|t| !t.completed)
        .filter_map(|t| snapshot.task_due_dates.get(&t.id))
        .filter_map(|d| datetime::parse_iso_date(d))
        .collect();
    let week_from_now = today + Duration::days(7);

    let with_due_date = tasks
        .iter()
        .filter(|t| snapshot.task_due_dates.contains_key(&t.id))
        .count();

    TaskStatistics {
        total,
        completed,
        active,
        completion_rate,
        by_category,
        overdue: active_due.iter().filter(|d| **d < today).count(),
        due_today: active_due.iter().filter(|d| **d == today).count(),
        due_this_week: active_due.iter().filter(|d| **d > today && **d <= week_from_now).count(),
        with_due_date,
        without_due_date: total - with_due_date,
    }
}
