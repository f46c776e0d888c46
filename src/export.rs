//! JSON and CSV export of the task list.
//!
//! Tasks are enriched with the name and color of their category and with their
//! due date, resolved from the assignment maps. Assignments pointing at
//! categories that no longer exist resolve to nothing.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use crate::constants::CSV_HEADERS;
use crate::entities::{Category, Task};
use crate::storage::{TaskCategoryMap, TaskDueDateMap};
use crate::sync::TaskSnapshot;
use crate::utils::datetime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => anyhow::bail!("Unknown export format '{}', expected 'json' or 'csv'", other),
        }
    }
}

/// A task with its category and due date resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportableTask {
    pub id: u64,
    pub todo: String,
    pub completed: bool,
    pub user_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Resolve category and due date for every task, keeping task order.
pub fn enrich_tasks(
    tasks: &[Task],
    categories: &[Category],
    task_categories: &TaskCategoryMap,
    task_due_dates: &TaskDueDateMap,
) -> Vec<ExportableTask> {
    tasks
        .iter()
        .map(|task| {
            let category_id = task_categories.get(&task.id).or(task.category_id.as_ref()).cloned();
            let category = category_id
                .as_deref()
                .and_then(|id| categories.iter().find(|c| c.id == id));
            let due_date = task_due_dates.get(&task.id).or(task.due_date.as_ref()).cloned();

            ExportableTask {
                id: task.id,
                todo: task.todo.clone(),
                completed: task.completed,
                user_id: task.user_id,
                category_id,
                category_name: category.map(|c| c.name.clone()),
                category_color: category.map(|c| c.color.clone()),
                due_date,
            }
        })
        .collect()
}

/// Pretty-printed JSON array of enriched tasks.
pub fn export_json(snapshot: &TaskSnapshot) -> Result<String> {
    let tasks = enrich_tasks(
        &snapshot.tasks,
        &snapshot.categories,
        &snapshot.task_categories,
        &snapshot.task_due_dates,
    );
    serde_json::to_string_pretty(&tasks).context("Failed to serialize tasks to JSON")
}

/// CSV with a header row and one row per task, due dates rendered with
/// `date_format`.
pub fn export_csv(snapshot: &TaskSnapshot, date_format: &str) -> String {
    let tasks = enrich_tasks(
        &snapshot.tasks,
        &snapshot.categories,
        &snapshot.task_categories,
        &snapshot.task_due_dates,
    );

    let mut lines = Vec::with_capacity(tasks.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for task in &tasks {
        let row = [
            task.id.to_string(),
            quote_csv(&task.todo),
            if task.completed { "Yes" } else { "No" }.to_string(),
            task.category_name.as_deref().map(escape_csv_field).unwrap_or_default(),
            task.due_date
                .as_deref()
                .map(|d| escape_csv_field(&datetime::format_display_date(d, date_format)))
                .unwrap_or_default(),
            task.user_id.to_string(),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Render the snapshot in `format`.
pub fn render(snapshot: &TaskSnapshot, format: ExportFormat, date_format: &str) -> Result<String> {
    match format {
        ExportFormat::Json => export_json(snapshot),
        ExportFormat::Csv => Ok(export_csv(snapshot, date_format)),
    }
}

/// `tasks-YYYY-MM-DD.<ext>`
pub fn default_file_name(format: ExportFormat, date: NaiveDate) -> String {
    format!("tasks-{}.{}", datetime::format_ymd(date), format.extension())
}

/// Write rendered export content to `path`.
pub fn write_export(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create export directory: {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write export file: {}", path.display()))
}

/// Always quote, doubling embedded quotes.
fn quote_csv(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Quote only when the value would otherwise break the row.
fn escape_csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        quote_csv(value)
    } else {
        value.to_string()
    }
}
