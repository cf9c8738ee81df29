#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use taskman::libs::badge::{BadgeColor, PriorityBadge, StatusBadge};
    use taskman::libs::formatter::{
        format_due_date, format_timestamp, is_valid_format, truncate, urgency_label, urgency_note, DEFAULT_DATE_FORMAT, DEFAULT_TIMESTAMP_FORMAT,
    };
    use taskman::libs::summary::TaskSummary;
    use taskman::libs::task::{Priority, Status, Task};
    use taskman::libs::urgency::Urgency;

    fn created() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(15, 7, 0).unwrap()
    }

    fn task(id: i64, status: Status) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: String::new(),
            priority: Priority::Medium,
            status,
            due_date: None,
            created_at: created(),
            updated_at: created(),
        }
    }

    #[test]
    fn test_priority_badges() {
        assert_eq!(PriorityBadge::from(Priority::High).color(), BadgeColor::Red);
        assert_eq!(PriorityBadge::from(Priority::Medium).color(), BadgeColor::Yellow);
        assert_eq!(PriorityBadge::from(Priority::Low).color(), BadgeColor::Green);
        assert_eq!(PriorityBadge::from(Priority::High).label(), "High");
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(StatusBadge::from(Status::Completed).color(), BadgeColor::Green);
        assert_eq!(StatusBadge::from(Status::InProgress).color(), BadgeColor::Blue);
        assert_eq!(StatusBadge::from(Status::Pending).color(), BadgeColor::Grey);
        assert_eq!(StatusBadge::from(Status::InProgress).label(), "In Progress");
    }

    #[test]
    fn test_unknown_labels_fall_back_to_neutral_badge() {
        assert_eq!(PriorityBadge::from_label("Urgent"), PriorityBadge::Unknown);
        assert_eq!(PriorityBadge::from_label("Urgent").color(), BadgeColor::Grey);
        assert_eq!(StatusBadge::from_label("Blocked"), StatusBadge::Unknown);
        assert_eq!(StatusBadge::from_label("Blocked").color(), BadgeColor::Dark);
        assert_eq!(StatusBadge::from_label("Completed"), StatusBadge::Completed);
    }

    #[test]
    fn test_summary_counts_by_status() {
        let tasks = vec![
            task(1, Status::Pending),
            task(2, Status::Completed),
            task(3, Status::InProgress),
            task(4, Status::Pending),
        ];
        let summary = TaskSummary::from_tasks(&tasks);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.pending + summary.in_progress + summary.completed, summary.total);
        assert_eq!(summary.count(Status::Pending), 2);
    }

    #[test]
    fn test_summary_of_empty_listing() {
        assert_eq!(TaskSummary::from_tasks(&[]), TaskSummary::default());
    }

    #[test]
    fn test_date_formatting() {
        assert_eq!(format_due_date(NaiveDate::from_ymd_opt(2024, 6, 9), DEFAULT_DATE_FORMAT), "Jun 09, 2024");
        assert_eq!(format_due_date(None, DEFAULT_DATE_FORMAT), "No due date");
        assert_eq!(format_timestamp(&created(), DEFAULT_TIMESTAMP_FORMAT), "Jun 01, 2024 at 3:07 PM");
    }

    #[test]
    fn test_invalid_format_falls_back_to_default() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 9);

        assert_eq!(format_due_date(date, "%Q"), "Jun 09, 2024");
        assert_eq!(format_timestamp(&created(), "%Y-%Q"), "Jun 01, 2024 at 3:07 PM");
        assert_eq!(format_due_date(date, "%d.%m.%Y"), "09.06.2024");
    }

    #[test]
    fn test_format_validation() {
        assert!(is_valid_format(DEFAULT_DATE_FORMAT));
        assert!(is_valid_format(DEFAULT_TIMESTAMP_FORMAT));
        assert!(is_valid_format("plain text"));
        assert!(!is_valid_format("%Q"));
        assert!(!is_valid_format("%"));
    }

    #[test]
    fn test_urgency_wording() {
        assert_eq!(urgency_label(&Urgency::Overdue { days: 2 }).as_deref(), Some("Overdue"));
        assert_eq!(urgency_label(&Urgency::DueSoon { days: 1 }).as_deref(), Some("Due soon"));
        assert_eq!(urgency_label(&Urgency::Upcoming { days: 9 }), None);

        assert_eq!(urgency_note(&Urgency::Overdue { days: 1 }).as_deref(), Some("Overdue by 1 day"));
        assert_eq!(urgency_note(&Urgency::DueSoon { days: 0 }).as_deref(), Some("Due today!"));
        assert_eq!(urgency_note(&Urgency::Upcoming { days: 5 }).as_deref(), Some("Due in 5 days"));
        assert_eq!(urgency_note(&Urgency::None), None);
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééé", 3), "éé…");
    }
}
