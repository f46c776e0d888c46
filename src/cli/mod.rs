//! Command-line front end.
//!
//! Every task command first reconciles with the remote service; when that
//! fails a warning is printed and the command continues on cached data.

pub mod commands;
pub mod output;

use anyhow::{anyhow, bail, Result};
use log::warn;

use crate::backend::{create_backend, CreateTaskArgs, UpdateTaskArgs};
use crate::config::Config;
use crate::constants::{
    SUCCESS_CATEGORY_CREATED, SUCCESS_CATEGORY_DELETED, SUCCESS_EXPORTED, SUCCESS_TASK_COMPLETED,
    SUCCESS_TASK_CREATED, SUCCESS_TASK_DELETED, SUCCESS_TASK_MOVED, SUCCESS_TASK_REOPENED, SUCCESS_TASK_UPDATED,
    WARN_SHOWING_CACHED,
};
use crate::entities::CategoryUpdate;
use crate::export::{self, ExportFormat};
use crate::filter::FilterStatus;
use crate::logger::Logger;
use crate::stats;
use crate::storage::LocalStorage;
use crate::sync::TaskService;
use crate::theme::{Theme, ThemeState};
use crate::utils::datetime;
use commands::{CategoryCmd, Cli, Commands};

/// Run a parsed command line to completion.
pub async fn run(cli: Cli) -> Result<()> {
    // Must work even when the existing config file is broken
    if let Commands::InitConfig(args) = &cli.command {
        let path = match &args.path {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if cli.offline {
        config.api.backend = "offline".to_string();
    }

    let data_dir = config.data_dir()?;
    let logger = match Logger::init(&config.logging, &data_dir) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("⚠️  Logging disabled: {e:#}");
            Logger::new()
        }
    };

    let storage = LocalStorage::open(&data_dir);
    let result = dispatch(cli.command, &config, storage).await;

    if cli.show_logs {
        for line in logger.get_logs().iter().rev() {
            eprintln!("{line}");
        }
    }
    result
}

async fn dispatch(command: Commands, config: &Config, storage: LocalStorage) -> Result<()> {
    if let Commands::Theme(args) = &command {
        let mut theme = ThemeState::load(storage, config.display.default_theme);
        match args.value.as_deref() {
            None => {}
            Some("toggle") => {
                theme.toggle();
            }
            Some(value) => theme.set(value.parse::<Theme>()?),
        }
        println!("{}", theme.theme());
        return Ok(());
    }

    let backend = create_backend(&config.api)?;
    let service = TaskService::new(backend, storage).with_default_user_id(config.api.default_user_id);

    let state = service.load().await;
    if let Some(error) = state.error() {
        eprintln!("{WARN_SHOWING_CACHED}: {error}");
    }

    match command {
        Commands::List(args) => {
            let status: FilterStatus = args.status.parse()?;
            let snapshot = service.snapshot().await;
            output::print_tasks(&snapshot, status, args.search.as_deref().unwrap_or(""), args.json)?;
        }
        Commands::Add(args) => {
            let mut create = CreateTaskArgs::new(args.text.join(" "));
            create.completed = Some(args.completed);
            let task = service.add_task(create).await?;
            println!("{SUCCESS_TASK_CREATED}: #{} {}", task.id, task.todo);
        }
        Commands::Edit(args) => {
            require_task(&service, args.id).await?;
            let task = service.update_task(args.id, UpdateTaskArgs::todo(args.text.join(" "))).await?;
            println!("{SUCCESS_TASK_UPDATED}: #{} {}", task.id, task.todo);
        }
        Commands::Done(args) => {
            require_task(&service, args.id).await?;
            service.toggle_task(args.id, true).await?;
            println!("{SUCCESS_TASK_COMPLETED}: #{}", args.id);
        }
        Commands::Undo(args) => {
            require_task(&service, args.id).await?;
            service.toggle_task(args.id, false).await?;
            println!("{SUCCESS_TASK_REOPENED}: #{}", args.id);
        }
        Commands::Delete(args) => {
            require_task(&service, args.id).await?;
            service.delete_task(args.id).await;
            println!("{SUCCESS_TASK_DELETED}: #{}", args.id);
        }
        Commands::Move(args) => {
            let len = service.tasks().await.len();
            if !(1..=len).contains(&args.from) || !(1..=len).contains(&args.to) {
                bail!("Positions must be between 1 and {}", len);
            }
            service.reorder_tasks(args.from - 1, args.to - 1).await;
            println!("{SUCCESS_TASK_MOVED}: {} -> {}", args.from, args.to);
        }
        Commands::Category(cmd) => run_category(&service, cmd).await?,
        Commands::Due(args) => {
            require_task(&service, args.id).await?;
            service.set_task_due_date(args.id, args.date.as_deref())?;
            match service.task_due_dates().get(&args.id) {
                Some(date) => println!("{SUCCESS_TASK_UPDATED}: #{} due {}", args.id, date),
                None => println!("{SUCCESS_TASK_UPDATED}: #{} has no due date", args.id),
            }
        }
        Commands::Stats(args) => {
            let snapshot = service.snapshot().await;
            let stats = stats::compute(&snapshot, datetime::today());
            output::print_stats(&stats, args.json)?;
        }
        Commands::Export(args) => {
            let format: ExportFormat = args.format.parse()?;
            let snapshot = service.snapshot().await;
            let content = export::render(&snapshot, format, &config.display.date_format)?;
            if args.stdout {
                println!("{content}");
            } else {
                let path = args
                    .output
                    .unwrap_or_else(|| export::default_file_name(format, datetime::today()).into());
                export::write_export(&path, &content)?;
                println!("{SUCCESS_EXPORTED} {}", path.display());
            }
        }
        Commands::Theme(_) | Commands::InitConfig(_) => unreachable!("handled before loading tasks"),
    }
    Ok(())
}

async fn run_category(service: &TaskService, cmd: CategoryCmd) -> Result<()> {
    match cmd {
        CategoryCmd::List => output::print_categories(&service.categories()),
        CategoryCmd::Add { name, color } => {
            let category = service.add_category(&name, &color)?;
            println!("{SUCCESS_CATEGORY_CREATED}: {} ({})", category.name, category.id);
        }
        CategoryCmd::Edit { id, name, color } => {
            let updated = service
                .update_category(&id, CategoryUpdate { name, color })?
                .ok_or_else(|| anyhow!("No category with id '{}'", id))?;
            println!("{SUCCESS_TASK_UPDATED}: {} {}", updated.name, updated.color);
        }
        CategoryCmd::Rm { id } => {
            if !service.delete_category(&id) {
                bail!("No category with id '{}'", id);
            }
            println!("{SUCCESS_CATEGORY_DELETED}: {id}");
        }
        CategoryCmd::Set { task_id, category_id } => {
            require_task(service, task_id).await?;
            if let Some(category_id) = &category_id {
                if !service.categories().iter().any(|c| &c.id == category_id) {
                    bail!("No category with id '{}'", category_id);
                }
            }
            service.set_task_category(task_id, category_id.as_deref());
            println!("{SUCCESS_TASK_UPDATED}: #{task_id}");
        }
    }
    Ok(())
}

async fn require_task(service: &TaskService, id: u64) -> Result<()> {
    if service.task(id).await.is_none() {
        warn!("Task {id} requested but not in the list");
        bail!("No task with id {}. Run `taskdeck list` to see task ids", id);
    }
    Ok(())
}
