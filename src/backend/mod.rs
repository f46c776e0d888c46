//! Backend abstraction layer for the remote task service.
//!
//! This module defines the common interface that task backends implement, the
//! request argument types, and the normalized error kinds every backend reports.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entities::Task;

pub mod dummyjson;
pub mod factory;
pub mod offline;

pub use dummyjson::DummyJsonBackend;
pub use factory::create_backend;
pub use offline::OfflineBackend;

/// Normalized error kinds for backend operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("Request timeout: the task service did not respond in time")]
    Timeout,

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl BackendError {
    /// HTTP status carried by the error, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Api { status, .. } => Some(*status),
            BackendError::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Errors raised before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, BackendError::InvalidInput(_))
    }
}

/// Arguments for creating a new task (`POST /todos/add`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskArgs {
    pub todo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

impl CreateTaskArgs {
    pub fn new(todo: impl Into<String>) -> Self {
        Self {
            todo: todo.into(),
            completed: None,
            user_id: None,
        }
    }
}

/// Partial update for a task (`PUT /todos/{id}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTaskArgs {
    pub fn completed(completed: bool) -> Self {
        Self {
            todo: None,
            completed: Some(completed),
        }
    }

    pub fn todo(todo: impl Into<String>) -> Self {
        Self {
            todo: Some(todo.into()),
            completed: None,
        }
    }

    /// Overlay these updates on top of an existing task.
    pub fn apply_to(&self, task: &Task) -> Task {
        let mut merged = task.clone();
        if let Some(todo) = &self.todo {
            merged.todo = todo.clone();
        }
        if let Some(completed) = self.completed {
            merged.completed = completed;
        }
        merged
    }
}

/// Reject text that is empty once trimmed.
pub(crate) fn validate_todo_text(todo: &str) -> Result<(), BackendError> {
    if todo.trim().is_empty() {
        return Err(BackendError::InvalidInput("Task text cannot be empty".to_string()));
    }
    Ok(())
}

/// Backend trait that all remote task services implement.
///
/// Every call is attempted exactly once; callers decide what to do on failure.
#[async_trait]
pub trait TaskBackend: Send + Sync {
    /// Returns the backend type identifier (e.g., "dummyjson", "offline").
    fn backend_type(&self) -> &str;

    async fn fetch_tasks(&self) -> Result<Vec<Task>, BackendError>;
    async fn fetch_task(&self, id: u64) -> Result<Task, BackendError>;
    async fn create_task(&self, args: CreateTaskArgs) -> Result<Task, BackendError>;
    async fn update_task(&self, id: u64, args: UpdateTaskArgs) -> Result<Task, BackendError>;
    async fn delete_task(&self, id: u64) -> Result<(), BackendError>;
}
