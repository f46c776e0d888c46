use std::collections::BTreeMap;

use super::db::LocalStorage;
use crate::constants::{CATEGORIES_STORAGE_KEY, TASK_CATEGORIES_STORAGE_KEY};
use crate::entities::{default_categories, Category};

/// Sparse task id -> category id assignments. Absent means uncategorized.
pub type TaskCategoryMap = BTreeMap<u64, String>;

impl LocalStorage {
    pub fn load_task_categories(&self) -> TaskCategoryMap {
        self.read_json(TASK_CATEGORIES_STORAGE_KEY, TaskCategoryMap::new)
    }

    pub fn store_task_categories(&self, map: &TaskCategoryMap) {
        self.write_json(TASK_CATEGORIES_STORAGE_KEY, map);
    }

    /// Assign or clear (`None`) the category of a single task.
    ///
    /// Returns the updated map so callers can refresh their copy.
    pub fn set_task_category(&self, task_id: u64, category_id: Option<&str>) -> TaskCategoryMap {
        let mut map = self.load_task_categories();
        match category_id {
            Some(category_id) if !category_id.is_empty() => {
                map.insert(task_id, category_id.to_string());
            }
            _ => {
                map.remove(&task_id);
            }
        }
        self.store_task_categories(&map);
        map
    }

    pub fn task_category(&self, task_id: u64) -> Option<String> {
        self.load_task_categories().remove(&task_id)
    }

    /// Load the category catalogue, the built-in defaults when none is stored
    pub fn load_categories(&self) -> Vec<Category> {
        self.read_json(CATEGORIES_STORAGE_KEY, default_categories)
    }

    pub fn store_categories(&self, categories: &[Category]) {
        self.write_json(CATEGORIES_STORAGE_KEY, categories);
    }
}
