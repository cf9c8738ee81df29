use super::badge::{PriorityBadge, StatusBadge};
use super::config::DisplayConfig;
use super::formatter::{format_due_date, format_timestamp, truncate, urgency_label, urgency_note};
use super::messages::Message;
use super::summary::TaskSummary;
use super::task::Task;
use super::urgency::Urgency;
use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task], now: NaiveDateTime, display: &DisplayConfig) -> Result<()> {
        let mut table = Table::new();

        table.set_titles(row!["ID", "TITLE", "DESCRIPTION", "PRIORITY", "DUE DATE", "STATUS", "CREATED"]);
        for task in tasks {
            let description = if task.description.is_empty() {
                Message::NoDescription.to_string()
            } else {
                truncate(&task.description, display.description_width)
            };

            table.add_row(Row::new(vec![
                Cell::new(&task.id.to_string()),
                Cell::new(&task.title),
                Cell::new(&description),
                priority_cell(PriorityBadge::from(task.priority)),
                due_cell(task, now, display),
                status_cell(StatusBadge::from(task.status)),
                Cell::new(&format_due_date(Some(task.created_at.date()), &display.date_format)),
            ]));
        }
        table.printstd();

        Ok(())
    }

    pub fn summary(summary: &TaskSummary) -> Result<()> {
        let mut table = Table::new();

        table.set_titles(row!["TOTAL", "PENDING", "IN PROGRESS", "COMPLETED"]);
        table.add_row(row![summary.total, summary.pending, summary.in_progress, summary.completed]);
        table.printstd();

        Ok(())
    }

    pub fn task(task: &Task, now: NaiveDateTime, display: &DisplayConfig) -> Result<()> {
        let mut table = Table::new();
        let priority = PriorityBadge::from(task.priority);
        let status = StatusBadge::from(task.status);

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(Row::new(vec![Cell::new("STATUS"), status_cell(status)]));
        table.add_row(Row::new(vec![Cell::new("PRIORITY"), priority_cell(priority)]));

        let description = if task.description.is_empty() {
            Message::NoDescriptionProvided.to_string()
        } else {
            task.description.clone()
        };
        table.add_row(row!["DESCRIPTION", description]);

        if task.due_date.is_some() {
            let urgency = Urgency::classify_task(task, now);
            let mut due = format_due_date(task.due_date, &display.date_format);
            if let Some(note) = urgency_note(&urgency) {
                due = format!("{}\n{}", due, note);
            }
            table.add_row(Row::new(vec![Cell::new("DUE DATE"), Cell::new(&due).style_spec(urgency_style(&urgency))]));
        }

        table.add_row(row!["CREATED", format_timestamp(&task.created_at, &display.timestamp_format)]);
        if task.was_updated() {
            table.add_row(row!["LAST UPDATED", format_timestamp(&task.updated_at, &display.timestamp_format)]);
        }
        table.printstd();

        Ok(())
    }
}

fn priority_cell(badge: PriorityBadge) -> Cell {
    Cell::new(&format!("{} {}", badge.icon(), badge.label())).style_spec(badge.color().style_spec())
}

fn status_cell(badge: StatusBadge) -> Cell {
    Cell::new(&format!("{} {}", badge.icon(), badge.label())).style_spec(badge.color().style_spec())
}

fn due_cell(task: &Task, now: NaiveDateTime, display: &DisplayConfig) -> Cell {
    let urgency = Urgency::classify_task(task, now);
    let mut text = format_due_date(task.due_date, &display.date_format);
    if let Some(label) = urgency_label(&urgency) {
        text = format!("{}\n{}", text, label);
    }
    Cell::new(&text).style_spec(urgency_style(&urgency))
}

fn urgency_style(urgency: &Urgency) -> &'static str {
    match urgency {
        Urgency::Overdue { .. } => "Fr",
        Urgency::DueSoon { .. } => "Fy",
        Urgency::Upcoming { .. } | Urgency::None => "",
    }
}
