//! Local storage module for persisting task data between runs
//!
//! This module provides best-effort key-value persistence for:
//! - The task list
//! - Task -> category assignments
//! - Task -> due date assignments
//! - The category catalogue
//! - The theme preference
//!
//! Each namespace lives under a fixed key and is stored as one JSON blob.
//! Reads never fail (missing or corrupt values yield an empty default) and
//! write failures are logged and swallowed.

pub mod categories;
pub mod db;
pub mod due_dates;
pub mod file;
pub mod memory;
pub mod preferences;
pub mod tasks;

pub use categories::TaskCategoryMap;
pub use db::LocalStorage;
pub use due_dates::TaskDueDateMap;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a raw key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raw string key-value store backing [`LocalStorage`].
///
/// Operations are synchronous; implementations decide where the bytes go.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
