use chrono::NaiveDate;
use taskdeck::entities::{default_categories, Task};
use taskdeck::stats::{compute, CategoryStats};
use taskdeck::sync::TaskSnapshot;

fn task(id: u64, completed: bool) -> Task {
    let mut task = Task::new(id, format!("task {id}"));
    task.completed = completed;
    task
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_empty_snapshot() {
    let stats = compute(&TaskSnapshot::default(), date(2025, 3, 10));
    assert_eq!(stats.total, 0);
    assert_eq!(stats.completion_rate, 0);
    assert!(stats.by_category.is_empty());
    assert_eq!(stats.without_due_date, 0);
}

#[test]
fn test_compute_counts() {
    let mut snapshot = TaskSnapshot {
        tasks: vec![
            task(1, false),
            task(2, true),
            task(3, false),
            task(4, false),
            task(5, false),
            task(6, false),
        ],
        categories: default_categories(),
        ..TaskSnapshot::default()
    };
    snapshot.task_categories.insert(1, "1".to_string());
    snapshot.task_categories.insert(2, "1".to_string());
    snapshot.task_categories.insert(4, "deleted".to_string());
    snapshot.task_categories.insert(99, "2".to_string());

    snapshot.task_due_dates.insert(1, "2025-03-09".to_string());
    snapshot.task_due_dates.insert(2, "2025-03-01".to_string());
    snapshot.task_due_dates.insert(3, "2025-03-10".to_string());
    snapshot.task_due_dates.insert(5, "2025-03-17".to_string());
    snapshot.task_due_dates.insert(6, "2025-03-18".to_string());
    snapshot.task_due_dates.insert(99, "2025-03-10".to_string());

    let stats = compute(&snapshot, date(2025, 3, 10));

    assert_eq!(stats.total, 6);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.active, 5);
    assert_eq!(stats.completion_rate, 17);

    assert_eq!(
        stats.by_category,
        vec![
            CategoryStats {
                category: "Work".to_string(),
                color: "#3B82F6".to_string(),
                total: 2,
                completed: 1,
                active: 1,
            },
            CategoryStats {
                category: "Uncategorized".to_string(),
                color: "#6B7280".to_string(),
                total: 4,
                completed: 0,
                active: 4,
            },
        ]
    );

    // Completed task 2 is past due but not overdue
    assert_eq!(stats.overdue, 1);
    assert_eq!(stats.due_today, 1);
    assert_eq!(stats.due_this_week, 1);
    assert_eq!(stats.with_due_date, 5);
    assert_eq!(stats.without_due_date, 1);
}
