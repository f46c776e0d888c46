//! Taskdeck - an offline-first personal task manager
//!
//! Tasks live in a remote task service and in a local key-value cache. The
//! app starts from the cache, reconciles with the remote on load, and keeps
//! working on local data whenever the remote is unreachable.
//!
//! # Modules
//!
//! * [`backend`] - Remote task service clients
//! * [`sync`] - Reconciliation of remote and local task state
//! * [`storage`] - Local key-value persistence
//! * [`export`] and [`stats`] - Views derived from a task snapshot
//! * [`cli`] - Command-line front end

/// Remote task service abstraction and clients
pub mod backend;

/// Command-line parsing and command handlers
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Task and category models
pub mod entities;

/// JSON and CSV export
pub mod export;

/// Status and text filters for task lists
pub mod filter;

/// Logging setup and in-memory log buffer
pub mod logger;

/// Task statistics
pub mod stats;

/// Local storage layer for caching tasks and preferences
pub mod storage;

/// Task service keeping local and remote data reconciled
pub mod sync;

/// Light/dark theme preference
pub mod theme;

/// Utility functions for date/time handling
pub mod utils;

pub use entities::{Category, Task};
