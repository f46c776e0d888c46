//! Logging setup.
//!
//! Records from the `log` facade are fanned out by `fern` to an in-memory
//! buffer (always) and to a log file in the data directory (when enabled).

use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;
use crate::constants::LOG_FILE_NAME;

/// Maximum number of records kept in memory
const MAX_BUFFERED_LOGS: usize = 500;

/// Shared in-memory log buffer that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_BUFFERED_LOGS))),
            log_file: None,
        }
    }

    /// Install the global logger according to `config`.
    ///
    /// # Errors
    /// Returns an error if the log file cannot be opened or a global logger
    /// is already installed.
    pub fn init(config: &LoggingConfig, data_dir: &Path) -> Result<Self> {
        let (logger, dispatch) = Self::dispatch(config, data_dir)?;
        dispatch.apply().context("Failed to install logger")?;
        Ok(logger)
    }

    /// Build the fern dispatch without installing it.
    pub fn dispatch(config: &LoggingConfig, data_dir: &Path) -> Result<(Self, fern::Dispatch)> {
        let mut logger = Self::new();
        let buffer = logger.clone();

        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(config.level_filter())
            .level_for("reqwest", log::LevelFilter::Warn)
            .level_for("hyper_util", log::LevelFilter::Warn)
            .chain(fern::Output::call(move |record| buffer.push(record.args().to_string())));

        if config.enabled {
            std::fs::create_dir_all(data_dir)
                .with_context(|| format!("Failed to create log directory: {}", data_dir.display()))?;
            let path = Self::get_log_file_path(data_dir);
            let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(file);
            logger.log_file = Some(path);
        }

        Ok((logger, dispatch))
    }

    /// Location of the log file inside `data_dir`
    pub fn get_log_file_path(data_dir: &Path) -> PathBuf {
        data_dir.join(LOG_FILE_NAME)
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    pub fn has_file_writer(&self) -> bool {
        self.log_file.is_some()
    }

    /// Add a log entry stamped with the current time
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        self.push(format!("[{}] {}", timestamp, message));
    }

    fn push(&self, line: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_BUFFERED_LOGS {
                logs.pop_front();
            }
            logs.push_back(line);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
