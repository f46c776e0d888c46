//! Backend that never reaches the network.
//!
//! Every call fails with [`BackendError::Network`], which drives the task
//! service down its local fallback paths. Useful when working without
//! connectivity or when the demo service is down.

use async_trait::async_trait;

use super::{validate_todo_text, BackendError, CreateTaskArgs, TaskBackend, UpdateTaskArgs};
use crate::entities::Task;

const OFFLINE_MESSAGE: &str = "offline mode: remote task service disabled";

#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineBackend;

impl OfflineBackend {
    pub fn new() -> Self {
        Self
    }

    fn unavailable<T>() -> Result<T, BackendError> {
        Err(BackendError::Network(OFFLINE_MESSAGE.to_string()))
    }
}

#[async_trait]
impl TaskBackend for OfflineBackend {
    fn backend_type(&self) -> &str {
        "offline"
    }

    async fn fetch_tasks(&self) -> Result<Vec<Task>, BackendError> {
        Self::unavailable()
    }

    async fn fetch_task(&self, _id: u64) -> Result<Task, BackendError> {
        Self::unavailable()
    }

    async fn create_task(&self, args: CreateTaskArgs) -> Result<Task, BackendError> {
        validate_todo_text(&args.todo)?;
        Self::unavailable()
    }

    async fn update_task(&self, _id: u64, args: UpdateTaskArgs) -> Result<Task, BackendError> {
        if let Some(todo) = &args.todo {
            validate_todo_text(todo)?;
        }
        Self::unavailable()
    }

    async fn delete_task(&self, _id: u64) -> Result<(), BackendError> {
        Self::unavailable()
    }
}
