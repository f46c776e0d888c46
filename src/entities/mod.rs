pub mod category;
pub mod task;

pub use category::{default_categories, Category, CategoryUpdate};
pub use task::{Task, TaskPage, DEFAULT_USER_ID};
