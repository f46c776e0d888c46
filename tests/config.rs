use std::fs;

use taskdeck::config::Config;
use taskdeck::theme::Theme;
use taskdeck::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.backend, "dummyjson");
    assert_eq!(config.api.base_url, "https://dummyjson.com");
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(config.api.default_user_id, 1);
    assert!(config.storage.data_dir.is_none());
    assert_eq!(config.display.date_format, datetime::ISO_DATE_FORMAT);
    assert_eq!(config.display.default_theme, Theme::Light);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    config.api.backend = "trello".to_string();
    assert!(config.validate().is_err());

    config = Config::default();
    config.api.timeout_secs = 0;
    assert!(config.validate().is_err());
    config.api.timeout_secs = 301;
    assert!(config.validate().is_err());

    config = Config::default();
    config.api.base_url = "dummyjson.com".to_string();
    assert!(config.validate().is_err());

    // Offline mode never talks to the base URL
    config.api.backend = "offline".to_string();
    assert!(config.validate().is_ok());

    config = Config::default();
    config.display.date_format = "%Q".to_string();
    assert!(config.validate().is_err());
    config.display.date_format = "  ".to_string();
    assert!(config.validate().is_err());
    config.display.date_format = "%d/%m/%Y".to_string();
    assert!(config.validate().is_ok());

    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());
    config.logging.level = "DEBUG".to_string();
    assert!(config.validate().is_ok());
    assert_eq!(config.logging.level_filter(), log::LevelFilter::Debug);
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("backend = \"dummyjson\""));
    assert!(toml_str.contains("timeout_secs = 10"));
    assert!(toml_str.contains("default_theme = \"light\""));
    assert!(!toml_str.contains("data_dir"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[api]
timeout_secs = 30

[display]
default_theme = "dark"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.display.default_theme, Theme::Dark);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.api.backend, "dummyjson");
    assert_eq!(config.api.default_user_id, 1);
    assert_eq!(config.display.date_format, datetime::ISO_DATE_FORMAT);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.api.backend, default_config.api.backend);
    assert_eq!(config.api.base_url, default_config.api.base_url);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.display.date_format, default_config.display.date_format);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskdeck.toml");
    fs::write(
        &path,
        r#"
[api]
backend = "offline"

[storage]
data_dir = "/tmp/taskdeck-data"
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.api.backend, "offline");
    assert_eq!(config.data_dir().unwrap(), std::path::PathBuf::from("/tmp/taskdeck-data"));
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[api]\ntimeout_secs = 0\n").unwrap();
    assert!(Config::load_from_file(&path).is_err());

    fs::write(&path, "[api\nbroken").unwrap();
    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));

    assert!(Config::load_from_file(dir.path().join("missing.toml")).is_err());
}

#[test]
fn test_generate_default_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# taskdeck Configuration File"));

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.api.base_url, Config::default().api.base_url);
}

#[test]
fn test_date_format_with_time_fields_rejected() {
    let mut config = Config::default();
    for format in ["%Y-%m-%d %H:%M", "%S", "%d %Z"] {
        config.display.date_format = format.to_string();
        assert!(config.validate().is_err(), "{format} should be rejected");
    }

    config.display.date_format = "%A %e %B %Y".to_string();
    assert!(config.validate().is_ok());
}
