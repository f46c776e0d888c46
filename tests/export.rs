use serde_json::Value;
use taskdeck::entities::{default_categories, Task};
use taskdeck::export::{enrich_tasks, export_csv, export_json, render, write_export, ExportFormat};
use taskdeck::sync::TaskSnapshot;

fn snapshot() -> TaskSnapshot {
    let mut quoted = Task::new(2, r#"Say "hello", then leave"#);
    quoted.completed = true;
    quoted.user_id = 7;

    let mut snapshot = TaskSnapshot {
        tasks: vec![Task::new(1, "Write report"), quoted, Task::new(1000, "Local only")],
        categories: default_categories(),
        ..TaskSnapshot::default()
    };
    snapshot.task_categories.insert(1, "1".to_string());
    // Category no longer in the catalogue
    snapshot.task_categories.insert(2, "gone".to_string());
    snapshot.task_due_dates.insert(1, "2025-03-09".to_string());
    // Assignment for a task that no longer exists
    snapshot.task_due_dates.insert(55, "2025-01-01".to_string());
    snapshot
}

#[test]
fn test_enrich_resolves_category_and_due_date() {
    let snapshot = snapshot();
    let enriched = enrich_tasks(
        &snapshot.tasks,
        &snapshot.categories,
        &snapshot.task_categories,
        &snapshot.task_due_dates,
    );

    assert_eq!(enriched.len(), 3);
    assert_eq!(enriched[0].category_name.as_deref(), Some("Work"));
    assert_eq!(enriched[0].category_color.as_deref(), Some("#3B82F6"));
    assert_eq!(enriched[0].due_date.as_deref(), Some("2025-03-09"));

    // Stale category id is kept but resolves to nothing
    assert_eq!(enriched[1].category_id.as_deref(), Some("gone"));
    assert!(enriched[1].category_name.is_none());
    assert!(enriched[2].category_id.is_none());
    assert!(enriched[2].due_date.is_none());
}

#[test]
fn test_export_json_shape() {
    let json = export_json(&snapshot()).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    let tasks = value.as_array().unwrap();

    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0]["categoryName"], "Work");
    assert_eq!(tasks[0]["dueDate"], "2025-03-09");
    assert_eq!(tasks[1]["userId"], 7);
    assert!(tasks[2].get("categoryName").is_none());
    // Pretty-printed
    assert!(json.contains("\n  "));
}

#[test]
fn test_export_csv_rows() {
    let csv = export_csv(&snapshot(), "%d/%m/%Y");
    let lines: Vec<&str> = csv.split('\n').collect();

    assert_eq!(lines[0], "ID,Task,Completed,Category,Due Date,User ID");
    assert_eq!(lines[1], r#"1,"Write report",No,Work,09/03/2025,1"#);
    assert_eq!(lines[2], r#"2,"Say ""hello"", then leave",Yes,,,7"#);
    assert_eq!(lines[3], r#"1000,"Local only",No,,,1"#);
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_export_empty_list() {
    let csv = export_csv(&TaskSnapshot::default(), "%Y-%m-%d");
    assert_eq!(csv, "ID,Task,Completed,Category,Due Date,User ID");
    assert_eq!(export_json(&TaskSnapshot::default()).unwrap(), "[]");
}

#[test]
fn test_render_and_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("tasks.csv");

    let format: ExportFormat = "CSV".parse().unwrap();
    let content = render(&snapshot(), format, "%Y-%m-%d").unwrap();
    write_export(&path, &content).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    assert!("xml".parse::<ExportFormat>().is_err());
}

#[test]
fn test_export_csv_with_time_format_keeps_raw_date() {
    let csv = export_csv(&snapshot(), "%Y-%m-%d %H:%M");
    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines[1], r#"1,"Write report",No,Work,2025-03-09,1"#);
}
