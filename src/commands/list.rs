//! Filtered task listing with per-status summary.

use super::{open_tasks, report};
use crate::{
    db::query::list_tasks,
    libs::{config::Config, messages::Message, summary::TaskSummary, task::TaskFilter, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Match text in title or description
    #[arg(short = 'q', long)]
    search: Option<String>,
    /// Only tasks with this status
    #[arg(short, long)]
    status: Option<String>,
    /// Only tasks with this priority
    #[arg(short, long)]
    priority: Option<String>,
}

pub fn cmd(list_args: ListArgs) -> Result<()> {
    let filter = TaskFilter::from_raw(list_args.search.as_deref(), list_args.status.as_deref(), list_args.priority.as_deref()).map_err(report)?;

    let tasks = list_tasks(&open_tasks()?, &filter).map_err(report)?;
    if tasks.is_empty() {
        if filter.is_active() {
            msg_info!(Message::NoTasksMatchFilters);
        } else {
            msg_info!(Message::NoTasksYet);
        }
        return Ok(());
    }

    let display = Config::read()?.display();
    let now = Local::now().naive_local();

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks, now, &display)?;

    msg_print!(Message::SummaryHeader, true);
    View::summary(&TaskSummary::from_tasks(&tasks))?;

    Ok(())
}
