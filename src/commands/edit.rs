//! Task editing command.
//!
//! With field flags only those fields change. Without any flag the task is
//! edited interactively with every field prefilled, and the result replaces
//! the stored task as a whole.

use super::{open_tasks, report};
use crate::{
    libs::{
        error::TaskError,
        messages::Message,
        task::{parse_due_date, NewTask, Priority, Status, Task, TaskPatch, DATE_FORMAT},
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
    #[arg(short, long)]
    title: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    #[arg(short, long)]
    priority: Option<String>,
    #[arg(short, long)]
    status: Option<String>,
    /// New due date as YYYY-MM-DD
    #[arg(long, conflicts_with = "clear_due")]
    due: Option<String>,
    /// Remove the due date
    #[arg(long)]
    clear_due: bool,
}

impl EditArgs {
    fn has_field_flags(&self) -> bool {
        self.title.is_some() || self.description.is_some() || self.priority.is_some() || self.status.is_some() || self.due.is_some() || self.clear_due
    }

    /// Builds a partial edit, reporting every unparsable flag at once.
    fn to_patch(&self) -> Result<TaskPatch, TaskError> {
        let mut errors = Vec::new();
        let mut patch = TaskPatch {
            title: self.title.clone(),
            description: self.description.clone(),
            ..Default::default()
        };

        if let Some(raw) = &self.priority {
            match raw.parse::<Priority>() {
                Ok(priority) => patch.priority = Some(priority),
                Err(e) => errors.push(e),
            }
        }
        if let Some(raw) = &self.status {
            match raw.parse::<Status>() {
                Ok(status) => patch.status = Some(status),
                Err(e) => errors.push(e),
            }
        }
        if self.clear_due {
            patch.due_date = Some(None);
        } else if let Some(raw) = &self.due {
            match parse_due_date(raw) {
                Ok(date) => patch.due_date = Some(date),
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(TaskError::invalid(errors))
        }
    }
}

pub fn cmd(edit_args: EditArgs) -> Result<()> {
    let mut tasks = open_tasks()?;
    let task = tasks.get(edit_args.id).map_err(report)?;

    let patch = if edit_args.has_field_flags() {
        edit_args.to_patch().map_err(report)?
    } else {
        msg_print!(Message::EditingTask(task.title.clone()), true);
        let edited = prompt_task(&task)?;
        if is_unchanged(&task, &edited) {
            TaskPatch::default()
        } else {
            TaskPatch::replace_with(&edited)
        }
    };

    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let updated = tasks.update(task.id, &patch).map_err(report)?;
    msg_success!(Message::TaskUpdated(updated.id));

    Ok(())
}

fn prompt_task(task: &Task) -> Result<NewTask> {
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .with_initial_text(task.title.clone())
        .interact_text()?;

    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .with_initial_text(task.description.clone())
        .allow_empty(true)
        .interact_text()?;

    let priority = Select::with_theme(&theme)
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&Priority::ALL.map(|p| p.label()))
        .default(Priority::ALL.iter().position(|p| *p == task.priority).unwrap_or(0))
        .interact()?;

    let status = Select::with_theme(&theme)
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&Status::ALL.map(|s| s.label()))
        .default(Status::ALL.iter().position(|s| *s == task.status).unwrap_or(0))
        .interact()?;

    let due_date: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .with_initial_text(task.due_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    NewTask::from_raw(
        &title,
        Some(&description),
        Some(Priority::ALL[priority].label()),
        Some(Status::ALL[status].label()),
        Some(&due_date),
    )
    .map_err(report)
}

fn is_unchanged(task: &Task, edited: &NewTask) -> bool {
    task.title == edited.title
        && task.description == edited.description
        && task.priority == edited.priority
        && task.status == edited.status
        && task.due_date == edited.due_date
}
