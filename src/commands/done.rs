use super::{open_tasks, report};
use crate::{
    libs::{messages::Message, task::Status},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
}

pub fn cmd(done_args: DoneArgs) -> Result<()> {
    let mut tasks = open_tasks()?;
    let task = tasks.get(done_args.id).map_err(report)?;

    if task.status == Status::Completed {
        msg_info!(Message::TaskAlreadyCompleted(task.title));
        return Ok(());
    }

    let task = tasks.complete(task.id).map_err(report)?;
    msg_success!(Message::TaskCompleted(task.title));

    Ok(())
}
