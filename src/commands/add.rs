//! Task creation command.

use super::{open_tasks, report};
use crate::{
    libs::{messages::Message, task::NewTask},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Longer free-form description
    #[arg(short, long)]
    description: Option<String>,
    /// Low, Medium or High
    #[arg(short, long)]
    priority: Option<String>,
    /// Pending, "In Progress" or Completed (default: Pending)
    #[arg(short, long)]
    status: Option<String>,
    /// Due date as YYYY-MM-DD
    #[arg(long)]
    due: Option<String>,
}

pub fn cmd(add_args: AddArgs) -> Result<()> {
    let task = NewTask::from_raw(
        &add_args.title,
        add_args.description.as_deref(),
        add_args.priority.as_deref(),
        add_args.status.as_deref(),
        add_args.due.as_deref(),
    )
    .map_err(report)?;

    let id = open_tasks()?.create(&task).map_err(report)?;
    msg_success!(Message::TaskCreated(id, task.title));

    Ok(())
}
