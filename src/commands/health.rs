//! Health check command.
//!
//! Probes the task database and the disk holding it. Exits with an error
//! when the report is unhealthy so scripts can rely on the status code.

use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        health::{DatabaseState, HealthReport},
        messages::Message,
    },
    msg_bail_anyhow, msg_error, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HealthArgs {
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

pub fn cmd(health_args: HealthArgs) -> Result<()> {
    let db_path = Config::read()?.db_path()?;
    let database = probe_database();
    let report = HealthReport::collect(database, &db_path);

    if health_args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if !report.is_healthy() {
        msg_bail_anyhow!(Message::HealthUnhealthy);
    }

    Ok(())
}

fn probe_database() -> Result<(), String> {
    let tasks = Tasks::new().map_err(|e| e.to_string())?;
    tasks.count().map(|_| ()).map_err(|e| e.to_string())
}

fn print_report(report: &HealthReport) {
    if report.is_healthy() {
        msg_success!(Message::HealthHealthy);
    } else {
        msg_error!(Message::HealthUnhealthy);
    }

    let database = match report.services.database {
        DatabaseState::Connected => "connected",
        DatabaseState::Failed => "failed",
    };
    msg_print!(Message::HealthDatabase(database.to_string()));
    if let Some(error) = &report.error {
        msg_warning!(error);
    }

    match &report.services.disk {
        Some(disk) => msg_print!(Message::HealthDisk(disk.usage_percent, format!("{:?}", disk.status).to_lowercase())),
        None => msg_print!(Message::HealthDiskUnavailable),
    }
}
