use std::fs;

use log::{Level, Record};
use taskdeck::config::LoggingConfig;
use taskdeck::logger::Logger;

#[test]
fn test_in_memory_logging() {
    let logger = Logger::new();
    assert!(!logger.has_file_writer());

    logger.log("First message".to_string());
    logger.log("Second message".to_string());

    // Newest first
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].contains("Second message"));
    assert!(logs[1].contains("First message"));

    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_buffer_is_bounded() {
    let logger = Logger::new();
    for i in 0..600 {
        logger.log(format!("message {i}"));
    }
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 500);
    assert!(logs[0].ends_with("message 599"));
    assert!(logs[499].ends_with("message 100"));
}

#[test]
fn test_dispatch_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig::default();

    let (logger, _dispatch) = Logger::dispatch(&config, dir.path()).unwrap();
    assert!(!logger.has_file_writer());
    assert!(logger.log_file().is_none());
    assert!(!Logger::get_log_file_path(dir.path()).exists());
}

#[test]
fn test_dispatch_writes_buffer_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        enabled: true,
        level: "info".to_string(),
    };

    let (logger, dispatch) = Logger::dispatch(&config, dir.path()).unwrap();
    assert!(logger.has_file_writer());
    let (_, log) = dispatch.into_log();

    log.log(
        &Record::builder()
            .args(format_args!("Fetched 3 tasks"))
            .level(Level::Info)
            .target("taskdeck::sync")
            .build(),
    );
    log.log(
        &Record::builder()
            .args(format_args!("connection details"))
            .level(Level::Info)
            .target("reqwest::connect")
            .build(),
    );
    log.log(
        &Record::builder()
            .args(format_args!("too chatty"))
            .level(Level::Debug)
            .target("taskdeck::sync")
            .build(),
    );
    log.flush();

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("INFO"));
    assert!(logs[0].contains("taskdeck::sync: Fetched 3 tasks"));

    let path = logger.log_file().unwrap().to_path_buf();
    assert_eq!(path, Logger::get_log_file_path(dir.path()));
    let content = fs::read_to_string(path).unwrap();
    assert!(content.contains("Fetched 3 tasks"));
    assert!(!content.contains("connection details"));
}
