use std::collections::HashSet;

use anyhow::Result;

use crate::entities::Category;
use crate::export::enrich_tasks;
use crate::filter::{filter_tasks, FilterStatus};
use crate::stats::TaskStatistics;
use crate::sync::TaskSnapshot;
use crate::utils::datetime;

/// Print the tasks passing the filters, numbered by their position in the
/// full list so the numbers can be fed back to `move`.
pub fn print_tasks(snapshot: &TaskSnapshot, status: FilterStatus, query: &str, json: bool) -> Result<()> {
    let visible = filter_tasks(&snapshot.tasks, status, query);

    if json {
        let owned: Vec<_> = visible.into_iter().cloned().collect();
        let enriched = enrich_tasks(
            &owned,
            &snapshot.categories,
            &snapshot.task_categories,
            &snapshot.task_due_dates,
        );
        println!("{}", serde_json::to_string_pretty(&enriched)?);
        return Ok(());
    }

    if visible.is_empty() {
        println!("No tasks");
        return Ok(());
    }

    let visible_ids: HashSet<u64> = visible.iter().map(|t| t.id).collect();
    for (index, task) in snapshot.tasks.iter().enumerate() {
        if !visible_ids.contains(&task.id) {
            continue;
        }
        let check = if task.completed { "x" } else { " " };
        let mut line = format!("{:>3}. [{}] #{} {}", index + 1, check, task.id, task.todo);

        if let Some(category) = snapshot
            .task_categories
            .get(&task.id)
            .and_then(|id| snapshot.categories.iter().find(|c| &c.id == id))
        {
            line.push_str(&format!(" ({})", category.name));
        }
        if let Some(due) = snapshot.task_due_dates.get(&task.id) {
            line.push_str(&format!(" - due {}", datetime::format_human_date(due)));
        }
        println!("{line}");
    }
    Ok(())
}

pub fn print_categories(categories: &[Category]) {
    for category in categories {
        println!("{:<38} {} {}", category.id, category.color, category.name);
    }
}

pub fn print_stats(stats: &TaskStatistics, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("📊 Statistics");
    println!(
        "Total: {}  Completed: {}  Active: {}  ({}% complete)",
        stats.total, stats.completed, stats.active, stats.completion_rate
    );
    println!(
        "Overdue: {}  Due today: {}  Due this week: {}",
        stats.overdue, stats.due_today, stats.due_this_week
    );
    println!(
        "With due date: {}  Without: {}",
        stats.with_due_date, stats.without_due_date
    );
    if !stats.by_category.is_empty() {
        println!();
        for entry in &stats.by_category {
            println!(
                "  {:<16} {:>3} total  {:>3} done  {:>3} active",
                entry.category, entry.total, entry.completed, entry.active
            );
        }
    }
    Ok(())
}
