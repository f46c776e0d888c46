//! Constants used throughout the application
//!
//! This module centralizes storage keys, service defaults, and user-facing
//! messages to keep them consistent.

// Remote service defaults
pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
/// Upper bound accepted for `api.timeout_secs`
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// Local id generation
/// Locally generated ids start above this value; remote ids stay below it
pub const LOCAL_ID_FLOOR: u64 = 999;

// Local store keys, one per namespace
pub const TASKS_STORAGE_KEY: &str = "task-manager-tasks";
pub const TASK_CATEGORIES_STORAGE_KEY: &str = "task-manager-task-categories";
pub const TASK_DUE_DATES_STORAGE_KEY: &str = "task-manager-task-due-dates";
pub const THEME_STORAGE_KEY: &str = "task-manager-theme";
pub const CATEGORIES_STORAGE_KEY: &str = "task-manager-categories";

// Files
pub const APP_DIR_NAME: &str = "taskdeck";
pub const LOCAL_CONFIG_FILE: &str = "taskdeck.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "taskdeck.log";

// Export
pub const CSV_HEADERS: [&str; 6] = ["ID", "Task", "Completed", "Category", "Due Date", "User ID"];

// Success Messages
pub const SUCCESS_TASK_CREATED: &str = "✅ Task created";
pub const SUCCESS_TASK_UPDATED: &str = "✅ Task updated";
pub const SUCCESS_TASK_COMPLETED: &str = "✅ Task completed";
pub const SUCCESS_TASK_REOPENED: &str = "✅ Task reopened";
pub const SUCCESS_TASK_DELETED: &str = "✅ Task deleted";
pub const SUCCESS_TASK_MOVED: &str = "✅ Task moved";
pub const SUCCESS_CATEGORY_CREATED: &str = "✅ Category created";
pub const SUCCESS_CATEGORY_DELETED: &str = "✅ Category deleted";
pub const SUCCESS_EXPORTED: &str = "✅ Exported tasks to";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Warning Messages
pub const WARN_SHOWING_CACHED: &str = "⚠️  Could not reach the task service, showing cached tasks";
