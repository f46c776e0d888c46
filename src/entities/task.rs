use serde::{Deserialize, Serialize};

/// Owner id assigned to tasks when the caller does not name one.
pub const DEFAULT_USER_ID: u64 = 1;

/// A single to-do item, serialized the way the remote service and the local
/// cache both expect it (camelCase keys).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub todo: String,
    pub completed: bool,
    #[serde(default = "default_user_id")]
    pub user_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

fn default_user_id() -> u64 {
    DEFAULT_USER_ID
}

impl Task {
    pub fn new(id: u64, todo: impl Into<String>) -> Self {
        Self {
            id,
            todo: todo.into(),
            completed: false,
            user_id: DEFAULT_USER_ID,
            category_id: None,
            due_date: None,
        }
    }

    /// Placeholder used when an update targets an id that is not in memory.
    pub fn bare(id: u64) -> Self {
        Self::new(id, String::new())
    }
}

/// Envelope returned by `GET /todos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPage {
    pub todos: Vec<Task>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}
