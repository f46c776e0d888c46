use std::fs;

use clap::Parser;
use taskdeck::cli::{self, commands::Cli};
use taskdeck::config::Config;

#[tokio::test]
async fn test_init_config_ignores_broken_config() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "[api\nnot toml").unwrap();
    let target = dir.path().join("fresh").join("config.toml");

    let args = Cli::parse_from([
        "taskdeck",
        "--config",
        broken.to_str().unwrap(),
        "init-config",
        target.to_str().unwrap(),
    ]);
    cli::run(args).await.unwrap();

    let config = Config::load_from_file(&target).unwrap();
    assert_eq!(config.api.backend, "dummyjson");
}

#[tokio::test]
async fn test_broken_config_blocks_task_commands() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "[api\nnot toml").unwrap();

    let args = Cli::parse_from(["taskdeck", "--config", broken.to_str().unwrap(), "list"]);
    let err = cli::run(args).await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
