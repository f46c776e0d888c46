use std::collections::BTreeMap;

use super::db::LocalStorage;
use crate::constants::TASK_DUE_DATES_STORAGE_KEY;

/// Sparse task id -> ISO date (`YYYY-MM-DD`) assignments.
pub type TaskDueDateMap = BTreeMap<u64, String>;

impl LocalStorage {
    pub fn load_task_due_dates(&self) -> TaskDueDateMap {
        self.read_json(TASK_DUE_DATES_STORAGE_KEY, TaskDueDateMap::new)
    }

    pub fn store_task_due_dates(&self, map: &TaskDueDateMap) {
        self.write_json(TASK_DUE_DATES_STORAGE_KEY, map);
    }

    /// Assign or clear (`None`) the due date of a single task.
    pub fn set_task_due_date(&self, task_id: u64, due_date: Option<&str>) -> TaskDueDateMap {
        let mut map = self.load_task_due_dates();
        match due_date {
            Some(due_date) if !due_date.is_empty() => {
                map.insert(task_id, due_date.to_string());
            }
            _ => {
                map.remove(&task_id);
            }
        }
        self.store_task_due_dates(&map);
        map
    }

    pub fn task_due_date(&self, task_id: u64) -> Option<String> {
        self.load_task_due_dates().remove(&task_id)
    }
}
