use anyhow::{bail, Result};
use log::info;

use crate::entities::category::is_hex_color;
use crate::entities::{Category, CategoryUpdate};
use crate::storage::{TaskCategoryMap, TaskDueDateMap};
use crate::sync::TaskService;
use crate::utils::datetime;

impl TaskService {
    /// The category catalogue
    pub fn categories(&self) -> Vec<Category> {
        self.storage.load_categories()
    }

    /// Adds a category with a generated id.
    ///
    /// # Errors
    /// Returns an error if the name is blank or the color is not `#RRGGBB`.
    pub fn add_category(&self, name: &str, color: &str) -> Result<Category> {
        let name = name.trim();
        if name.is_empty() {
            bail!("Category name cannot be empty");
        }
        if !is_hex_color(color) {
            bail!("Invalid color '{}', expected #RRGGBB", color);
        }

        let category = Category::with_generated_id(name, color);
        let mut categories = self.storage.load_categories();
        categories.push(category.clone());
        self.storage.store_categories(&categories);
        info!("✅ Created category '{}' ({})", category.name, category.id);
        Ok(category)
    }

    /// Applies a partial update; returns `None` when no category has `id`.
    ///
    /// # Errors
    /// Returns an error if a provided name is blank or a color is malformed.
    pub fn update_category(&self, id: &str, update: CategoryUpdate) -> Result<Option<Category>> {
        if update.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            bail!("Category name cannot be empty");
        }
        if let Some(color) = update.color.as_deref() {
            if !is_hex_color(color) {
                bail!("Invalid color '{}', expected #RRGGBB", color);
            }
        }

        let mut categories = self.storage.load_categories();
        let Some(category) = categories.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            category.name = name.trim().to_string();
        }
        if let Some(color) = update.color {
            category.color = color;
        }
        let updated = category.clone();
        self.storage.store_categories(&categories);
        Ok(Some(updated))
    }

    /// Removes a category from the catalogue.
    ///
    /// Tasks still pointing at it are left alone and show as uncategorized.
    pub fn delete_category(&self, id: &str) -> bool {
        let mut categories = self.storage.load_categories();
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return false;
        }
        self.storage.store_categories(&categories);
        info!("✅ Deleted category {id}");
        true
    }

    pub fn task_categories(&self) -> TaskCategoryMap {
        self.storage.load_task_categories()
    }

    /// Assigns a task to a category, or clears it with `None`.
    pub fn set_task_category(&self, task_id: u64, category_id: Option<&str>) -> TaskCategoryMap {
        self.storage.set_task_category(task_id, category_id)
    }

    pub fn task_due_dates(&self) -> TaskDueDateMap {
        self.storage.load_task_due_dates()
    }

    /// Sets or clears (`None`) the due date of a task.
    ///
    /// Accepts `YYYY-MM-DD` or a full ISO timestamp, stored as the date part.
    ///
    /// # Errors
    /// Returns an error if the date cannot be parsed.
    pub fn set_task_due_date(&self, task_id: u64, due_date: Option<&str>) -> Result<TaskDueDateMap> {
        let normalized = match due_date.map(str::trim).filter(|d| !d.is_empty()) {
            Some(raw) => Some(datetime::normalize_iso_date(raw)?),
            None => None,
        };
        Ok(self.storage.set_task_due_date(task_id, normalized.as_deref()))
    }

    /// Drop category and due-date assignments of a deleted task.
    pub(crate) fn prune_assignments(&self, task_id: u64) {
        let mut categories = self.storage.load_task_categories();
        if categories.remove(&task_id).is_some() {
            self.storage.store_task_categories(&categories);
        }
        let mut due_dates = self.storage.load_task_due_dates();
        if due_dates.remove(&task_id).is_some() {
            self.storage.store_task_due_dates(&due_dates);
        }
    }
}
