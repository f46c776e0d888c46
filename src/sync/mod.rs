//! Task reconciliation service for the taskdeck application.
//!
//! This module provides the [`TaskService`] struct which owns the in-memory task
//! list and keeps it reconciled with a remote task backend and the local store.
//!
//! The service acts as the main data layer for the application, offering:
//! - Instant startup from the local cache, before any network activity
//! - A load step that merges the remote list with tasks only known locally
//! - Create/update/delete operations that try the remote first and fall back
//!   to local-only effects when it fails
//! - Purely local reordering, category and due-date assignment
//!
//! Only load failures are reported (as a message kept in [`LoadState`]);
//! mutation fallbacks are silent so the app keeps working offline.

pub mod categories;
pub mod tasks;

use std::collections::HashSet;
use std::sync::Arc;

use log::{error, info};
use tokio::sync::Mutex;

use crate::backend::TaskBackend;
use crate::constants::LOCAL_ID_FLOOR;
use crate::entities::{Category, Task, DEFAULT_USER_ID};
use crate::storage::{LocalStorage, TaskCategoryMap, TaskDueDateMap};

/// Lifecycle of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// A load is in flight; the list shows cached tasks meanwhile
    Loading,
    /// The last load finished
    Ready {
        /// Message from the last failed load, `None` after a successful one
        error: Option<String>,
    },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Ready { error } => error.as_deref(),
            LoadState::Loading => None,
        }
    }
}

/// Everything an export or a statistics view needs, captured at one point.
#[derive(Debug, Clone, Default)]
pub struct TaskSnapshot {
    pub tasks: Vec<Task>,
    pub categories: Vec<Category>,
    pub task_categories: TaskCategoryMap,
    pub task_due_dates: TaskDueDateMap,
}

pub(crate) struct TaskState {
    pub(crate) tasks: Vec<Task>,
    pub(crate) load_state: LoadState,
    /// Lowest id the next local task may take
    pub(crate) next_local_id: u64,
}

impl TaskState {
    fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            load_state: LoadState::Loading,
            next_local_id: LOCAL_ID_FLOOR + 1,
        }
    }

    /// Hand out the next local id: above every id currently held and above
    /// every id handed out before.
    pub(crate) fn allocate_local_id(&mut self) -> u64 {
        let max_existing = self.tasks.iter().map(|t| t.id).max().unwrap_or(0).max(LOCAL_ID_FLOOR);
        let id = self.next_local_id.max(max_existing + 1);
        self.next_local_id = id + 1;
        id
    }
}

/// Service that reconciles the remote task backend with local storage.
///
/// Cloning is cheap and every clone shares the same state. The state lock is
/// never held across a remote call, so each mutation applies its result to
/// the latest in-memory list rather than to the list seen when it started.
///
/// # Example
/// ```rust,no_run
/// use std::sync::Arc;
/// use taskdeck::backend::DummyJsonBackend;
/// use taskdeck::storage::LocalStorage;
/// use taskdeck::sync::TaskService;
///
/// # async fn example() {
/// let service = TaskService::new(Arc::new(DummyJsonBackend::with_defaults()), LocalStorage::in_memory());
///
/// // Cached tasks are available immediately
/// let cached = service.tasks().await;
///
/// // Merge in the remote list
/// service.load().await;
/// let tasks = service.tasks().await;
/// # let _ = (cached, tasks);
/// # }
/// ```
#[derive(Clone)]
pub struct TaskService {
    backend: Arc<dyn TaskBackend>,
    storage: LocalStorage,
    state: Arc<Mutex<TaskState>>,
    default_user_id: u64,
}

impl TaskService {
    /// Creates the service, seeded synchronously from the local store.
    pub fn new(backend: Arc<dyn TaskBackend>, storage: LocalStorage) -> Self {
        let cached = storage.load_tasks();
        info!("💾 Loaded {} cached tasks", cached.len());
        Self {
            backend,
            storage,
            state: Arc::new(Mutex::new(TaskState::new(cached))),
            default_user_id: DEFAULT_USER_ID,
        }
    }

    /// Owner id used for tasks created without one.
    #[must_use]
    pub fn with_default_user_id(mut self, user_id: u64) -> Self {
        self.default_user_id = user_id;
        self
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    pub fn backend_type(&self) -> &str {
        self.backend.backend_type()
    }

    /// Current task list in display order.
    pub async fn tasks(&self) -> Vec<Task> {
        self.state.lock().await.tasks.clone()
    }

    pub async fn task(&self, id: u64) -> Option<Task> {
        self.state.lock().await.tasks.iter().find(|t| t.id == id).cloned()
    }

    pub async fn load_state(&self) -> LoadState {
        self.state.lock().await.load_state.clone()
    }

    /// Message from the most recent failed load, if any.
    pub async fn error(&self) -> Option<String> {
        self.state.lock().await.load_state.error().map(str::to_string)
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.load_state.is_loading()
    }

    /// Fetches the remote list and reconciles it with the local store.
    ///
    /// On success the merged list replaces the in-memory one and is persisted.
    /// On failure the stored list is shown and the error message retained.
    ///
    /// A reorder that lands while this is in flight is overwritten when the
    /// load resolves.
    pub async fn load(&self) -> LoadState {
        self.state.lock().await.load_state = LoadState::Loading;
        info!("🔄 Fetching tasks from {} backend...", self.backend.backend_type());

        let result = self.backend.fetch_tasks().await;
        let stored = self.storage.load_tasks();

        let mut state = self.state.lock().await;
        match result {
            Ok(remote) => {
                info!("✅ Fetched {} tasks from backend", remote.len());
                let merged = merge_remote_with_local(remote, &stored);
                self.storage.store_tasks(&merged);
                info!("✅ Stored {} tasks locally", merged.len());
                state.tasks = merged;
                state.load_state = LoadState::Ready { error: None };
            }
            Err(e) => {
                error!("❌ Failed to fetch tasks: {e}");
                info!("💾 Falling back to {} cached tasks", stored.len());
                state.tasks = stored;
                state.load_state = LoadState::Ready {
                    error: Some(e.to_string()),
                };
            }
        }
        state.load_state.clone()
    }

    /// Re-runs [`load`](Self::load) on demand.
    pub async fn refetch(&self) -> LoadState {
        self.load().await
    }

    /// Tasks together with categories and assignments, for export and stats.
    pub async fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot {
            tasks: self.tasks().await,
            categories: self.storage.load_categories(),
            task_categories: self.storage.load_task_categories(),
            task_due_dates: self.storage.load_task_due_dates(),
        }
    }
}

/// Union of the remote list and locally stored tasks, keyed by id.
///
/// Remote tasks come first in remote order, followed by stored tasks whose id
/// the remote does not know, in stored order.
pub fn merge_remote_with_local(remote: Vec<Task>, local: &[Task]) -> Vec<Task> {
    let remote_ids: HashSet<u64> = remote.iter().map(|t| t.id).collect();
    let mut merged = remote;
    merged.extend(local.iter().filter(|t| !remote_ids.contains(&t.id)).cloned());
    merged
}
