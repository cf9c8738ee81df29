//! Task deletion command with confirmation.

use super::{open_tasks, report};
use crate::{libs::messages::Message, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(delete_args: DeleteArgs) -> Result<()> {
    let mut tasks = open_tasks()?;
    let task = tasks.get(delete_args.id).map_err(report)?;

    if !delete_args.yes {
        msg_warning!(Message::TaskDeleteIrreversible);
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    tasks.delete(task.id).map_err(report)?;
    msg_success!(Message::TaskDeleted(task.title));

    Ok(())
}
