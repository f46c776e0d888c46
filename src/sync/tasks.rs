use log::{debug, info, warn};

use crate::backend::{validate_todo_text, BackendError, CreateTaskArgs, UpdateTaskArgs};
use crate::entities::Task;
use crate::sync::TaskService;

impl TaskService {
    /// Creates a task, remotely if possible and locally otherwise.
    ///
    /// The remote service is tried first. If it fails for any reason a task is
    /// synthesized with the next local id. Either way the task is prepended to
    /// the list and persisted.
    ///
    /// # Errors
    /// Returns [`BackendError::InvalidInput`] when the text is empty; remote
    /// failures are never returned.
    pub async fn add_task(&self, args: CreateTaskArgs) -> Result<Task, BackendError> {
        validate_todo_text(&args.todo)?;

        let args = CreateTaskArgs {
            completed: Some(args.completed.unwrap_or(false)),
            user_id: Some(args.user_id.unwrap_or(self.default_user_id)),
            ..args
        };

        let remote = self.backend.create_task(args.clone()).await;

        let mut state = self.state.lock().await;
        let task = match remote {
            Ok(mut task) => {
                // The demo service hands out the same id for every create
                if state.tasks.iter().any(|t| t.id == task.id) {
                    let local_id = state.allocate_local_id();
                    debug!("Remote id {} already in use, renumbering to {local_id}", task.id);
                    task.id = local_id;
                }
                info!("✅ Created task {} remotely", task.id);
                task
            }
            Err(e) => {
                let id = state.allocate_local_id();
                warn!("⚠️  Remote create failed ({e}), created task {id} locally");
                Task {
                    id,
                    todo: args.todo,
                    completed: args.completed.unwrap_or(false),
                    user_id: args.user_id.unwrap_or(self.default_user_id),
                    category_id: None,
                    due_date: None,
                }
            }
        };

        state.tasks.insert(0, task.clone());
        self.storage.store_tasks(&state.tasks);
        Ok(task)
    }

    /// Convenience wrapper for [`add_task`](Self::add_task) with just the text.
    pub async fn add_task_text(&self, todo: &str) -> Result<Task, BackendError> {
        self.add_task(CreateTaskArgs::new(todo)).await
    }

    /// Updates a task, remotely if possible and locally otherwise.
    ///
    /// When the remote accepts the update its returned task replaces the local
    /// one. Otherwise `args` are merged over the existing task (or over a bare
    /// task carrying only `id` when none is held). The result is persisted and
    /// returned either way.
    ///
    /// # Errors
    /// Returns [`BackendError::InvalidInput`] when new text is provided but
    /// empty; remote failures are never returned.
    pub async fn update_task(&self, id: u64, args: UpdateTaskArgs) -> Result<Task, BackendError> {
        if let Some(todo) = &args.todo {
            validate_todo_text(todo)?;
        }

        let remote = self.backend.update_task(id, args.clone()).await;

        let mut state = self.state.lock().await;
        let updated = match remote {
            Ok(task) => {
                info!("✅ Updated task {id} remotely");
                task
            }
            Err(e) => {
                match &e {
                    BackendError::NotFound(_) => debug!("Task {id} unknown to the remote, updating locally"),
                    _ => warn!("⚠️  Remote update of task {id} failed ({e}), updating locally"),
                }
                let existing = state.tasks.iter().find(|t| t.id == id).cloned().unwrap_or_else(|| Task::bare(id));
                args.apply_to(&existing)
            }
        };

        if let Some(slot) = state.tasks.iter_mut().find(|t| t.id == id) {
            *slot = updated.clone();
        }
        self.storage.store_tasks(&state.tasks);
        Ok(updated)
    }

    /// Sets only the completion flag of a task.
    pub async fn toggle_task(&self, id: u64, completed: bool) -> Result<Task, BackendError> {
        self.update_task(id, UpdateTaskArgs::completed(completed)).await
    }

    /// Deletes a task everywhere it can.
    ///
    /// The remote delete is attempted but its outcome does not matter: the
    /// task is always removed from memory and from the local store, along with
    /// its category and due-date assignments.
    pub async fn delete_task(&self, id: u64) {
        match self.backend.delete_task(id).await {
            Ok(()) => info!("✅ Deleted task {id} remotely"),
            Err(BackendError::NotFound(_)) => debug!("Task {id} unknown to the remote, deleting locally"),
            Err(e) => warn!("⚠️  Remote delete of task {id} failed ({e}), deleting locally"),
        }

        {
            let mut state = self.state.lock().await;
            state.tasks.retain(|t| t.id != id);
            self.storage.store_tasks(&state.tasks);
        }
        self.prune_assignments(id);
    }

    /// Moves the task at `from` to `to` in the current order.
    ///
    /// Purely local. Equal or out-of-range indices leave the list untouched
    /// and write nothing. Returns whether the order changed.
    pub async fn reorder_tasks(&self, from: usize, to: usize) -> bool {
        let mut state = self.state.lock().await;
        let len = state.tasks.len();
        if from == to || from >= len || to >= len {
            return false;
        }

        let moved = state.tasks.remove(from);
        state.tasks.insert(to, moved);
        self.storage.store_tasks(&state.tasks);
        true
    }
}
