use super::db::LocalStorage;
use crate::constants::TASKS_STORAGE_KEY;
use crate::entities::Task;

impl LocalStorage {
    /// Load the cached task list, empty when nothing usable is stored
    pub fn load_tasks(&self) -> Vec<Task> {
        self.read_json(TASKS_STORAGE_KEY, Vec::new)
    }

    /// Replace the cached task list
    pub fn store_tasks(&self, tasks: &[Task]) {
        self.write_json(TASKS_STORAGE_KEY, tasks);
    }

    pub fn clear_tasks(&self) {
        self.remove_key(TASKS_STORAGE_KEY);
    }
}
