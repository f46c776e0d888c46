use serde::{Deserialize, Serialize};

/// Display name used for tasks without a category.
pub const UNCATEGORIZED_NAME: &str = "Uncategorized";
/// Color used for tasks without a category.
pub const UNCATEGORIZED_COLOR: &str = "#6B7280";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Hex color, e.g. `#3B82F6`
    pub color: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Create a category with a freshly generated id.
    pub fn with_generated_id(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), name, color)
    }
}

/// Partial update for a category; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// Catalogue used until the user edits their own.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("1", "Work", "#3B82F6"),
        Category::new("2", "Personal", "#10B981"),
        Category::new("3", "Shopping", "#F59E0B"),
        Category::new("4", "Health", "#EF4444"),
        Category::new("5", "Other", "#8B5CF6"),
    ]
}

/// Check that a color looks like `#RRGGBB`.
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7 && color.starts_with('#') && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}
