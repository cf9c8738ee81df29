#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use taskman::libs::health::{DatabaseState, DiskState, HealthReport, HealthStatus};

    fn report(database: Result<(), String>, disk: Option<f64>) -> HealthReport {
        let timestamp = Local.with_ymd_and_hms(2024, 6, 10, 9, 30, 0).unwrap();
        HealthReport::from_checks(database, disk, "test-host".to_string(), timestamp)
    }

    #[test]
    fn test_healthy_report() {
        let report = report(Ok(()), Some(41.2749));

        assert!(report.is_healthy());
        assert_eq!(report.services.database, DatabaseState::Connected);
        let disk = report.services.disk.unwrap();
        assert_eq!(disk.usage_percent, 41.27);
        assert_eq!(disk.status, DiskState::Ok);
        assert_eq!(report.error, None);
    }

    #[test]
    fn test_database_failure_is_unhealthy() {
        let report = report(Err("unable to open database file".to_string()), Some(10.0));

        assert_eq!(report.status, HealthStatus::Unhealthy);
        assert_eq!(report.services.database, DatabaseState::Failed);
        assert_eq!(report.error.as_deref(), Some("unable to open database file"));
    }

    #[test]
    fn test_disk_thresholds() {
        assert_eq!(DiskState::from_usage(80.0), DiskState::Ok);
        assert_eq!(DiskState::from_usage(85.0), DiskState::Warning);
        assert_eq!(DiskState::from_usage(90.5), DiskState::Critical);

        assert!(report(Ok(()), Some(85.0)).is_healthy());
        assert!(!report(Ok(()), Some(95.0)).is_healthy());
    }

    #[test]
    fn test_unknown_disk_does_not_fail_report() {
        let report = report(Ok(()), None);

        assert!(report.is_healthy());
        assert!(report.services.disk.is_none());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(report(Ok(()), Some(50.0))).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["server"], "test-host");
        assert_eq!(json["services"]["database"], "connected");
        assert_eq!(json["services"]["disk"]["status"], "ok");
        assert!(json.get("error").is_none());
    }
}
