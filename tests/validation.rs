#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskman::libs::error::ValidationError;
    use taskman::libs::task::{parse_due_date, NewTask, Priority, Status, TaskFilter, TaskPatch};

    #[test]
    fn test_from_raw_accepts_complete_input() {
        let task = NewTask::from_raw("Plan", Some(" notes "), Some("Medium"), Some("in progress"), Some("2024-06-12")).unwrap();

        assert_eq!(task.title, "Plan");
        assert_eq!(task.description, "notes");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.status, Status::InProgress);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 6, 12));
    }

    #[test]
    fn test_from_raw_reports_every_error() {
        let long_description = "d".repeat(1001);
        let error = NewTask::from_raw("", Some(&long_description), Some("Urgent"), Some("Done"), Some("2024-02-30")).unwrap_err();

        assert_eq!(
            error.validation_errors(),
            &[
                ValidationError::TitleRequired,
                ValidationError::DescriptionTooLong,
                ValidationError::InvalidPriority("Urgent".to_string()),
                ValidationError::InvalidStatus("Done".to_string()),
                ValidationError::InvalidDate("2024-02-30".to_string()),
            ]
        );
    }

    #[test]
    fn test_priority_is_required() {
        let error = NewTask::from_raw("Title", None, None, None, None).unwrap_err();
        assert_eq!(error.validation_errors(), &[ValidationError::InvalidPriority(String::new())]);
    }

    #[test]
    fn test_title_length_limit() {
        assert!(NewTask::from_raw(&"t".repeat(255), None, Some("Low"), None, None).is_ok());

        let error = NewTask::from_raw(&"t".repeat(256), None, Some("Low"), None, None).unwrap_err();
        assert_eq!(error.validation_errors(), &[ValidationError::TitleTooLong]);
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::TitleRequired.to_string(), "Title is required.");
        assert_eq!(ValidationError::InvalidPriority("x".to_string()).to_string(), "Invalid priority level.");
        assert_eq!(ValidationError::InvalidDate("x".to_string()).to_string(), "Invalid date format.");
    }

    #[test]
    fn test_due_date_parsing_is_strict() {
        assert_eq!(parse_due_date(""), Ok(None));
        assert_eq!(parse_due_date("0000-00-00"), Ok(None));
        assert_eq!(parse_due_date("2024-06-01"), Ok(NaiveDate::from_ymd_opt(2024, 6, 1)));
        assert!(parse_due_date("2024-6-1").is_err());
        assert!(parse_due_date("06/01/2024").is_err());
        assert!(parse_due_date("tomorrow").is_err());
    }

    #[test]
    fn test_filter_from_raw_normalizes_input() {
        let filter = TaskFilter::from_raw(Some("  "), Some(""), None).unwrap();
        assert_eq!(filter, TaskFilter::all());
        assert!(!filter.is_active());

        let filter = TaskFilter::from_raw(Some(" report "), Some("pending"), Some("HIGH")).unwrap();
        assert_eq!(filter.search.as_deref(), Some("report"));
        assert_eq!(filter.status, Some(Status::Pending));
        assert_eq!(filter.priority, Some(Priority::High));
        assert!(filter.is_active());
    }

    #[test]
    fn test_filter_rejects_unknown_values() {
        let error = TaskFilter::from_raw(None, Some("Blocked"), Some("Urgent")).unwrap_err();
        assert_eq!(error.validation_errors().len(), 2);
    }

    #[test]
    fn test_patch_validates_only_present_fields() {
        assert!(TaskPatch::default().validate().is_ok());
        assert!(TaskPatch::complete().validate().is_ok());

        let patch = TaskPatch {
            title: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(patch.validate().unwrap_err().validation_errors(), &[ValidationError::TitleRequired]);
    }

    #[test]
    fn test_padded_title_is_checked_after_trimming() {
        let padded = format!("{} ", "t".repeat(255));

        assert!(NewTask::from_raw(&padded, None, Some("Low"), None, None).is_ok());

        let patch = TaskPatch {
            title: Some(padded),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());
        assert_eq!(patch.normalized().title.map(|t| t.chars().count()), Some(255));
    }
}
