use taskdeck::entities::Task;
use taskdeck::filter::{filter_tasks, filter_tasks_owned, FilterStatus};

fn sample_tasks() -> Vec<Task> {
    let mut done = Task::new(2, "Buy MILK and eggs");
    done.completed = true;
    vec![Task::new(1, "Write report"), done, Task::new(3, "Buy stamps")]
}

#[test]
fn test_status_filter() {
    let tasks = sample_tasks();
    let ids = |status| filter_tasks(&tasks, status, "").iter().map(|t| t.id).collect::<Vec<_>>();

    assert_eq!(ids(FilterStatus::All), vec![1, 2, 3]);
    assert_eq!(ids(FilterStatus::Active), vec![1, 3]);
    assert_eq!(ids(FilterStatus::Completed), vec![2]);
}

#[test]
fn test_query_is_case_insensitive_substring() {
    let tasks = sample_tasks();

    let matched = filter_tasks_owned(&tasks, FilterStatus::All, "  buy ");
    assert_eq!(matched.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 3]);

    let matched = filter_tasks_owned(&tasks, FilterStatus::Active, "milk");
    assert!(matched.is_empty());

    let matched = filter_tasks_owned(&tasks, FilterStatus::Completed, "Milk");
    assert_eq!(matched.len(), 1);
}

#[test]
fn test_parse_status() {
    assert_eq!("all".parse::<FilterStatus>().unwrap(), FilterStatus::All);
    assert_eq!("Active".parse::<FilterStatus>().unwrap(), FilterStatus::Active);
    assert_eq!("done".parse::<FilterStatus>().unwrap(), FilterStatus::Completed);
    assert!("pending".parse::<FilterStatus>().is_err());
    assert_eq!(FilterStatus::default(), FilterStatus::All);
    assert_eq!(FilterStatus::Completed.to_string(), "completed");
}
