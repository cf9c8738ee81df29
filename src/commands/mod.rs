pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod health;
pub mod init;
pub mod list;
pub mod migrations;
pub mod show;

use crate::db::tasks::Tasks;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks, optionally filtered")]
    List(list::ListArgs),
    #[command(about = "Show task details")]
    Show(show::ShowArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Mark a task as completed")]
    Done(done::DoneArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Check database connectivity and disk usage")]
    Health(health::HealthArgs),
    #[command(about = "Inspect database schema migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Health(args) => health::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Turns a library error into the user-facing command error.
pub(crate) fn report(error: TaskError) -> anyhow::Error {
    match error {
        TaskError::Validation(errors) => {
            let details: Vec<String> = errors.0.iter().map(|e| format!("  - {}", e)).collect();
            msg_error_anyhow!(format!("{}\n{}", Message::ValidationFailed, details.join("\n")))
        }
        TaskError::NotFound(id) => msg_error_anyhow!(Message::TaskNotFoundWithId(id)),
        TaskError::InvalidRow { id, reason } => msg_error_anyhow!(Message::TaskUnreadable(id, reason)),
        TaskError::StorageUnavailable(e) => msg_error_anyhow!(Message::StorageUnavailable(e.to_string())),
        TaskError::Io(e) => anyhow::Error::from(e),
    }
}

/// Opens the task store, rendering connection failures like query failures.
pub(crate) fn open_tasks() -> Result<Tasks> {
    Tasks::new().map_err(storage_error)
}

fn storage_error(error: anyhow::Error) -> anyhow::Error {
    match error.downcast::<rusqlite::Error>() {
        Ok(e) => report(TaskError::StorageUnavailable(e)),
        Err(e) => e,
    }
}
