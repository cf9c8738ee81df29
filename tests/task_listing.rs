#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use std::time::Duration;
    use taskman::db::db::Db;
    use taskman::db::query::list_tasks;
    use taskman::db::tasks::{TaskStore, Tasks};
    use taskman::libs::error::{TaskError, TaskResult};
    use taskman::libs::task::{NewTask, Priority, Status, Task, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ListingTestContext {
        _temp_dir: TempDir,
        tasks: Tasks,
    }

    impl TestContext for ListingTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("tasks.db"), Duration::from_secs(1)).unwrap();
            let mut tasks = Tasks::from(db);

            let seed = [
                ("Write report", "Quarterly numbers", Priority::High, Status::Pending),
                ("Review PR", "Check the report generator", Priority::Medium, Status::InProgress),
                ("Buy milk", "", Priority::Low, Status::Completed),
                ("Plan sprint", "Backlog grooming", Priority::High, Status::InProgress),
                ("Fix 100% CPU bug", "", Priority::High, Status::Pending),
            ];
            for (day, (title, description, priority, status)) in seed.into_iter().enumerate() {
                let task = NewTask::new(title, priority).with_description(description).with_status(status);
                tasks.create_at(&task, at(day as u32 + 1)).unwrap();
            }

            ListingTestContext { _temp_dir: temp_dir, tasks }
        }
    }

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_empty_filter_returns_all_newest_first(ctx: &mut ListingTestContext) {
        let tasks = list_tasks(&ctx.tasks, &TaskFilter::all()).unwrap();

        assert_eq!(titles(&tasks), vec!["Fix 100% CPU bug", "Plan sprint", "Buy milk", "Review PR", "Write report"]);
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_same_creation_time_orders_by_id(ctx: &mut ListingTestContext) {
        let first = ctx.tasks.create_at(&NewTask::new("Twin A", Priority::Low), at(20)).unwrap();
        let second = ctx.tasks.create_at(&NewTask::new("Twin B", Priority::Low), at(20)).unwrap();

        let tasks = list_tasks(&ctx.tasks, &TaskFilter::all()).unwrap();
        assert_eq!(tasks[0].id, second);
        assert_eq!(tasks[1].id, first);
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_search_matches_title_or_description(ctx: &mut ListingTestContext) {
        let tasks = list_tasks(&ctx.tasks, &TaskFilter::all().with_search("report")).unwrap();

        assert_eq!(titles(&tasks), vec!["Review PR", "Write report"]);
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_search_treats_percent_literally(ctx: &mut ListingTestContext) {
        let tasks = list_tasks(&ctx.tasks, &TaskFilter::all().with_search("100%")).unwrap();
        assert_eq!(titles(&tasks), vec!["Fix 100% CPU bug"]);

        let tasks = list_tasks(&ctx.tasks, &TaskFilter::all().with_search("%")).unwrap();
        assert_eq!(tasks.len(), 1);
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_filters_are_conjunctive(ctx: &mut ListingTestContext) {
        let filter = TaskFilter::all().with_status(Status::InProgress).with_priority(Priority::High);
        let tasks = list_tasks(&ctx.tasks, &filter).unwrap();

        assert_eq!(titles(&tasks), vec!["Plan sprint"]);
        for task in &tasks {
            assert_eq!(task.status, Status::InProgress);
            assert_eq!(task.priority, Priority::High);
        }
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_adding_a_filter_never_grows_the_result(ctx: &mut ListingTestContext) {
        let broad = list_tasks(&ctx.tasks, &TaskFilter::all().with_priority(Priority::High)).unwrap();
        let narrow = list_tasks(&ctx.tasks, &TaskFilter::all().with_priority(Priority::High).with_status(Status::Pending)).unwrap();

        assert!(narrow.len() <= broad.len());
        for task in &narrow {
            assert!(broad.contains(task));
        }
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_listing_is_idempotent(ctx: &mut ListingTestContext) {
        let filter = TaskFilter::all().with_search("a");

        let first = list_tasks(&ctx.tasks, &filter).unwrap();
        let second = list_tasks(&ctx.tasks, &filter).unwrap();
        assert_eq!(first, second);
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_no_match_is_empty_not_error(ctx: &mut ListingTestContext) {
        let tasks = list_tasks(&ctx.tasks, &TaskFilter::all().with_search("nothing like this")).unwrap();
        assert!(tasks.is_empty());
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_hostile_search_leaves_table_intact(ctx: &mut ListingTestContext) {
        let tasks = list_tasks(&ctx.tasks, &TaskFilter::all().with_search("'; DROP TABLE tasks; --")).unwrap();
        assert!(tasks.is_empty());

        assert_eq!(ctx.tasks.count().unwrap(), 5);
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_missing_table_is_storage_unavailable(ctx: &mut ListingTestContext) {
        ctx.tasks.conn.execute("DROP TABLE tasks", []).unwrap();

        let result = list_tasks(&ctx.tasks, &TaskFilter::all());
        assert!(matches!(result, Err(TaskError::StorageUnavailable(_))));
    }

    struct UnreachableStore;

    impl TaskStore for UnreachableStore {
        fn query(&self, _filter: &TaskFilter) -> TaskResult<Vec<Task>> {
            Err(TaskError::StorageUnavailable(rusqlite::Error::InvalidQuery))
        }
    }

    #[test]
    fn test_store_failure_is_propagated() {
        let result = list_tasks(&UnreachableStore, &TaskFilter::all());
        assert!(matches!(result, Err(TaskError::StorageUnavailable(_))));
    }

    fn legacy_database(temp_dir: &TempDir) -> std::path::PathBuf {
        let path = temp_dir.path().join("legacy.db");
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                priority TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'Pending',
                due_date DATE,
                created_at TIMESTAMP NOT NULL,
                updated_at TIMESTAMP NOT NULL
            );
            INSERT INTO tasks (title, priority, status, created_at, updated_at)
                VALUES ('Good', 'Low', 'Pending', '2024-06-01 09:00:00', '2024-06-01 09:00:00');
            INSERT INTO tasks (title, priority, status, created_at, updated_at)
                VALUES ('Odd', 'Urgent', 'Blocked', '2024-06-02 09:00:00', '2024-06-02 09:00:00');",
        )
        .unwrap();
        path
    }

    #[test]
    fn test_unreadable_row_is_skipped_in_listing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let tasks = Tasks::from(Db::open(legacy_database(&temp_dir), Duration::from_secs(1)).unwrap());

        let listed = list_tasks(&tasks, &TaskFilter::all()).unwrap();
        assert_eq!(titles(&listed), vec!["Good"]);
        assert_eq!(tasks.count().unwrap(), 2);
    }

    #[test]
    fn test_unreadable_row_lookup_is_not_a_storage_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let tasks = Tasks::from(Db::open(legacy_database(&temp_dir), Duration::from_secs(1)).unwrap());

        assert!(matches!(tasks.get(2), Err(TaskError::InvalidRow { id: 2, .. })));
        assert_eq!(tasks.get(1).unwrap().title, "Good");
    }
}
