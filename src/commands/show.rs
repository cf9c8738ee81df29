use super::{open_tasks, report};
use crate::libs::{config::Config, view::View};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
}

pub fn cmd(show_args: ShowArgs) -> Result<()> {
    let task = open_tasks()?.get(show_args.id).map_err(report)?;

    View::task(&task, Local::now().naive_local(), &Config::read()?.display())
}
