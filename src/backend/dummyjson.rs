//! HTTP backend for the DummyJSON demo task service.
//!
//! The demo service answers every write as if it succeeded but never stores
//! anything, so updates and deletes against ids it did not hand out come back
//! as 404. Those surface as [`BackendError::NotFound`] and are expected.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Response, StatusCode};
use serde_json::Value;

use super::{validate_todo_text, BackendError, CreateTaskArgs, TaskBackend, UpdateTaskArgs};
use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::entities::{Task, TaskPage};

/// DummyJSON backend implementation.
pub struct DummyJsonBackend {
    client: reqwest::Client,
    base_url: String,
}

impl DummyJsonBackend {
    /// Create a backend against `base_url` with the given per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Backend pointed at the public demo service with the default timeout.
    pub fn with_defaults() -> Self {
        Self::new(
            DEFAULT_API_BASE_URL,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Read the body, map non-2xx statuses to errors, and parse JSON.
    async fn read_json(response: Response) -> Result<Value, BackendError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| classify_reqwest_error(&e))?;

        if !status.is_success() {
            let message = error_message(status, &body);
            if status == StatusCode::NOT_FOUND {
                return Err(BackendError::NotFound(message));
            }
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| BackendError::MalformedResponse(format!("invalid JSON body: {e}")))
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<Value, BackendError> {
        let response = request.send().await.map_err(|e| classify_reqwest_error(&e))?;
        Self::read_json(response).await
    }
}

#[async_trait]
impl TaskBackend for DummyJsonBackend {
    fn backend_type(&self) -> &str {
        "dummyjson"
    }

    async fn fetch_tasks(&self) -> Result<Vec<Task>, BackendError> {
        debug!("GET {}/todos", self.base_url);
        let body = Self::send(self.client.get(self.url("/todos"))).await?;
        parse_task_list(body)
    }

    async fn fetch_task(&self, id: u64) -> Result<Task, BackendError> {
        debug!("GET {}/todos/{id}", self.base_url);
        let body = Self::send(self.client.get(self.url(&format!("/todos/{id}")))).await?;
        parse_task(body)
    }

    async fn create_task(&self, args: CreateTaskArgs) -> Result<Task, BackendError> {
        validate_todo_text(&args.todo)?;
        debug!("POST {}/todos/add", self.base_url);
        let body = Self::send(self.client.post(self.url("/todos/add")).json(&args)).await?;
        parse_task(body)
    }

    async fn update_task(&self, id: u64, args: UpdateTaskArgs) -> Result<Task, BackendError> {
        if let Some(todo) = &args.todo {
            validate_todo_text(todo)?;
        }
        debug!("PUT {}/todos/{id}", self.base_url);
        let body = Self::send(self.client.put(self.url(&format!("/todos/{id}"))).json(&args)).await?;
        parse_task(body)
    }

    async fn delete_task(&self, id: u64) -> Result<(), BackendError> {
        debug!("DELETE {}/todos/{id}", self.base_url);
        let response = self
            .client
            .delete(self.url(&format!("/todos/{id}")))
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        // A bare 204 carries no body to validate
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(());
        }
        Self::read_json(response).await.map(|_| ())
    }
}

fn classify_reqwest_error(err: &reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Timeout
    } else {
        BackendError::Network(err.to_string())
    }
}

/// Prefer the service's own `message`, else the HTTP status text.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.get("message").and_then(Value::as_str).map(str::to_string))
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()))
}

fn parse_task(body: Value) -> Result<Task, BackendError> {
    serde_json::from_value(body).map_err(|e| BackendError::MalformedResponse(format!("unexpected task shape: {e}")))
}

/// Expected format: `{"todos": [...], "total": N, "skip": N, "limit": N}`
fn parse_task_list(body: Value) -> Result<Vec<Task>, BackendError> {
    let todos = body
        .get("todos")
        .ok_or_else(|| BackendError::MalformedResponse("missing `todos` field".to_string()))?;
    if !todos.is_array() {
        return Err(BackendError::MalformedResponse("`todos` is not an array".to_string()));
    }
    serde_json::from_value::<TaskPage>(body)
        .map(|page| page.todos)
        .map_err(|e| BackendError::MalformedResponse(format!("unexpected task shape: {e}")))
}
