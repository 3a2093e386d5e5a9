use std::path::PathBuf;

use anyhow::Result;
use chore_core::manager::{TaskManager, TaskManagerConfig};
use clap::{Parser, Subcommand};

mod commands;

/// Chore - the repository task runner
#[derive(Parser)]
#[command(name = "chore")]
#[command(about = "Run the maintenance targets declared in .chore/tasks")]
#[command(version)]
struct Cli {
    /// Path to the workspace root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    workspace: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured targets
    List,
    /// Show the resolved command sequence for a target without running it
    Plan {
        /// Target name, e.g. "lint"
        target: String,
    },
    /// Run a target
    Run {
        /// Target name, e.g. "test"
        target: String,
    },
    /// Print the JSON schema for task configuration files
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Load and validate the target configuration once up front
    let manager = TaskManager::new(TaskManagerConfig {
        workspace_root: cli.workspace,
    })
    .map_err(|e| anyhow::anyhow!("Failed to load task configuration: {}", e))?;

    // Execute command (CLI layer only handles presentation)
    match cli.command {
        Commands::List => commands::list::execute(&manager),
        Commands::Plan { target } => commands::plan::execute(&manager, &target),
        Commands::Run { target } => commands::run::execute(&manager, &target).await,
        Commands::Schema => commands::schema::execute(),
    }
}
