use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskdeck", about = "Personal task manager with an offline-first local cache", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use this configuration file instead of the default lookup
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip the remote task service entirely
    #[arg(long, global = true)]
    pub offline: bool,

    /// Print buffered log records to stderr before exiting
    #[arg(long, global = true)]
    pub show_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks
    List(ListArgs),
    /// Add a task
    Add(AddArgs),
    /// Change the text of a task
    Edit(EditArgs),
    /// Mark a task completed
    Done(IdArgs),
    /// Mark a task active again
    Undo(IdArgs),
    /// Delete a task
    Delete(IdArgs),
    /// Move a task to another position (1-based, as shown by `list`)
    Move(MoveArgs),
    /// Category management
    #[command(subcommand)]
    Category(CategoryCmd),
    /// Set or clear a task's due date
    Due(DueArgs),
    /// Show task statistics
    Stats(StatsArgs),
    /// Export tasks as JSON or CSV
    Export(ExportArgs),
    /// Show, set, or toggle the theme
    Theme(ThemeArgs),
    /// Write a default configuration file
    InitConfig(InitConfigArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Status filter: all, active, completed
    #[arg(long, default_value = "all")]
    pub status: String,
    /// Case-insensitive text search
    #[arg(long, short = 's')]
    pub search: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
    /// Create the task already completed
    #[arg(long)]
    pub completed: bool,
}

#[derive(Args)]
pub struct EditArgs {
    pub id: u64,
    /// New task text
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct IdArgs {
    pub id: u64,
}

#[derive(Args)]
pub struct MoveArgs {
    /// Current position
    pub from: usize,
    /// New position
    pub to: usize,
}

#[derive(Subcommand)]
pub enum CategoryCmd {
    /// List categories
    List,
    /// Add a category
    Add {
        name: String,
        /// Hex color, e.g. #3B82F6
        color: String,
    },
    /// Rename or recolor a category
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Remove a category
    Rm { id: String },
    /// Assign a task to a category, or clear it when no category is given
    Set { task_id: u64, category_id: Option<String> },
}

#[derive(Args)]
pub struct DueArgs {
    pub id: u64,
    /// Date as YYYY-MM-DD; omit to clear
    pub date: Option<String>,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// json or csv
    pub format: String,
    /// Output file (default: tasks-YYYY-MM-DD.<format>)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
    /// Write to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// light, dark, or toggle; omit to show the current theme
    pub value: Option<String>,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Destination (default: the user config directory)
    pub path: Option<PathBuf>,
}
