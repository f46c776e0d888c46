use std::sync::Arc;

use taskdeck::constants::{TASKS_STORAGE_KEY, THEME_STORAGE_KEY};
use taskdeck::entities::{default_categories, Category, Task};
use taskdeck::storage::{FileStore, KeyValueStore, LocalStorage, MemoryStore};
use taskdeck::theme::Theme;

#[test]
fn test_tasks_round_trip_in_memory() {
    let storage = LocalStorage::in_memory();
    assert!(storage.load_tasks().is_empty());

    let mut done = Task::new(3, "done");
    done.completed = true;
    let tasks = vec![Task::new(1001, "local"), done];
    storage.store_tasks(&tasks);
    assert_eq!(storage.load_tasks(), tasks);

    storage.clear_tasks();
    assert!(storage.load_tasks().is_empty());
}

#[test]
fn test_corrupted_value_reads_as_default() {
    let store = Arc::new(MemoryStore::new());
    store.set(TASKS_STORAGE_KEY, "{not json").unwrap();
    store.set(THEME_STORAGE_KEY, "\"purple\"").unwrap();

    let storage = LocalStorage::new(store);
    assert!(storage.load_tasks().is_empty());
    assert_eq!(storage.load_theme(), None);
}

#[test]
fn test_unavailable_store_is_swallowed() {
    let store = Arc::new(MemoryStore::new());
    let storage = LocalStorage::new(store.clone());
    storage.store_tasks(&[Task::new(1, "kept")]);

    store.set_unavailable(true);
    storage.store_tasks(&[]);
    assert!(storage.load_tasks().is_empty());
    assert_eq!(storage.load_categories(), default_categories());

    store.set_unavailable(false);
    assert_eq!(storage.load_tasks(), vec![Task::new(1, "kept")]);
}

#[test]
fn test_tasks_serialized_camel_case() {
    let store = Arc::new(MemoryStore::new());
    let storage = LocalStorage::new(store.clone());
    let mut task = Task::new(7, "Call mom");
    task.user_id = 26;
    storage.store_tasks(&[task]);

    let raw = store.get(TASKS_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"[{"id":7,"todo":"Call mom","completed":false,"userId":26}]"#);
}

#[test]
fn test_file_store_persists_between_instances() {
    let dir = tempfile::tempdir().unwrap();

    let first = LocalStorage::open(dir.path());
    first.store_tasks(&[Task::new(1000, "persisted")]);
    first.set_task_category(1000, Some("2"));
    first.store_theme(Theme::Dark);

    let second = LocalStorage::open(dir.path());
    assert_eq!(second.load_tasks(), vec![Task::new(1000, "persisted")]);
    assert_eq!(second.task_category(1000), Some("2".to_string()));
    assert_eq!(second.load_theme(), Some(Theme::Dark));
}

#[test]
fn test_file_store_missing_and_remove() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested"));

    assert_eq!(store.get("absent").unwrap(), None);
    assert!(store.remove("absent").is_ok());

    store.set("key", "\"value\"").unwrap();
    assert!(store.dir().join("key.json").exists());
    assert_eq!(store.get("key").unwrap().as_deref(), Some("\"value\""));

    store.remove("key").unwrap();
    assert_eq!(store.get("key").unwrap(), None);
}

#[test]
fn test_category_assignment_set_and_clear() {
    let storage = LocalStorage::in_memory();

    let map = storage.set_task_category(5, Some("3"));
    assert_eq!(map.get(&5).map(String::as_str), Some("3"));

    let map = storage.set_task_category(5, Some(""));
    assert!(map.is_empty());

    storage.set_task_category(6, Some("1"));
    let map = storage.set_task_category(6, None);
    assert!(!map.contains_key(&6));
    assert!(storage.load_task_categories().is_empty());
}

#[test]
fn test_due_date_map_uses_string_keys() {
    let store = Arc::new(MemoryStore::new());
    let storage = LocalStorage::new(store.clone());

    storage.set_task_due_date(42, Some("2025-12-24"));
    assert_eq!(storage.task_due_date(42), Some("2025-12-24".to_string()));

    let raw = store
        .get(taskdeck::constants::TASK_DUE_DATES_STORAGE_KEY)
        .unwrap()
        .unwrap();
    assert_eq!(raw, r#"{"42":"2025-12-24"}"#);

    storage.set_task_due_date(42, None);
    assert_eq!(storage.task_due_date(42), None);
}

#[test]
fn test_categories_default_until_stored() {
    let storage = LocalStorage::in_memory();
    let defaults = storage.load_categories();
    assert_eq!(defaults.len(), 5);
    assert_eq!(defaults[0].name, "Work");

    storage.store_categories(&[Category::new("x", "Garden", "#00FF00")]);
    assert_eq!(storage.load_categories(), vec![Category::new("x", "Garden", "#00FF00")]);
}
