//! Health report for the task store and its host.
//!
//! The report is assembled from two probes: a trivial query against the
//! tasks table and the usage of the disk holding the database file. Disk
//! usage above 90% marks the whole report unhealthy, above 80% is a warning.
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "timestamp": "2024-06-10T09:30:00+02:00",
//!   "server": "laptop",
//!   "services": {
//!     "database": "connected",
//!     "disk": { "usage_percent": 41.27, "status": "ok" }
//!   }
//! }
//! ```

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::Path;
use sysinfo::{Disks, System};

pub const DISK_WARNING_PERCENT: f64 = 80.0;
pub const DISK_CRITICAL_PERCENT: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseState {
    Connected,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiskState {
    Ok,
    Warning,
    Critical,
}

impl DiskState {
    pub fn from_usage(usage_percent: f64) -> Self {
        if usage_percent > DISK_CRITICAL_PERCENT {
            DiskState::Critical
        } else if usage_percent > DISK_WARNING_PERCENT {
            DiskState::Warning
        } else {
            DiskState::Ok
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiskHealth {
    pub usage_percent: f64,
    pub status: DiskState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Services {
    pub database: DatabaseState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<DiskHealth>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub timestamp: String,
    pub server: String,
    pub services: Services,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    /// Builds a report from already-collected probe results.
    pub fn from_checks(database: Result<(), String>, disk_usage_percent: Option<f64>, server: String, timestamp: DateTime<Local>) -> Self {
        let (database, error) = match database {
            Ok(()) => (DatabaseState::Connected, None),
            Err(e) => (DatabaseState::Failed, Some(e)),
        };

        let disk = disk_usage_percent.map(|usage| DiskHealth {
            usage_percent: (usage * 100.0).round() / 100.0,
            status: DiskState::from_usage(usage),
        });

        let disk_critical = disk.as_ref().is_some_and(|d| d.status == DiskState::Critical);
        let status = if database == DatabaseState::Connected && !disk_critical {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };

        HealthReport {
            status,
            timestamp: timestamp.to_rfc3339(),
            server,
            services: Services { database, disk },
            error,
        }
    }

    /// Runs the disk probe for `db_path` and combines it with `database`.
    pub fn collect(database: Result<(), String>, db_path: &Path) -> Self {
        let server = System::host_name().unwrap_or_else(|| "unknown".to_string());
        Self::from_checks(database, disk_usage_percent(db_path), server, Local::now())
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

/// Usage of the disk whose mount point is the longest prefix of `path`.
pub fn disk_usage_percent(path: &Path) -> Option<f64> {
    let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let disks = Disks::new_with_refreshed_list();

    disks
        .list()
        .iter()
        .filter(|disk| path.starts_with(disk.mount_point()))
        .max_by_key(|disk| disk.mount_point().as_os_str().len())
        .and_then(|disk| {
            let total = disk.total_space();
            if total == 0 {
                return None;
            }
            let used = total.saturating_sub(disk.available_space());
            Some(used as f64 / total as f64 * 100.0)
        })
}
