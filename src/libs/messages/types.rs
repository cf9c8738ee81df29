#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64, String), // id, title
    TaskUpdated(i64),
    TaskCompleted(String),        // title
    TaskAlreadyCompleted(String), // title
    TaskDeleted(String),          // title
    TaskNotFoundWithId(i64),
    TaskUnreadable(i64, String), // id, reason
    ConfirmDeleteTask(String), // title
    TaskDeleteIrreversible,
    NoChangesDetected,
    EditingTask(String), // title
    ValidationFailed,
    StorageUnavailable(String), // error

    // === LISTING MESSAGES ===
    TasksHeader,
    NoTasksYet,
    NoTasksMatchFilters,
    SummaryHeader,
    NoDescription,
    NoDescriptionProvided,
    NoDueDate,

    // === DUE DATE MESSAGES ===
    UrgencyOverdue,
    UrgencyDueSoon,
    OverdueBy(i64), // days
    DueToday,
    DueIn(i64), // days

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskPriority,
    PromptTaskStatus,
    PromptTaskDueDate,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleDatabase,
    ConfigModuleDisplay,
    PromptSelectModules,
    PromptDatabasePath,
    PromptBusyTimeout,
    PromptDateFormat,
    PromptTimestampFormat,
    PromptDescriptionWidth,
    InvalidDateFormat(String), // format

    // === HEALTH MESSAGES ===
    HealthHealthy,
    HealthUnhealthy,
    HealthDatabase(String),  // state
    HealthDisk(f64, String), // usage percent, state
    HealthDiskUnavailable,

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
}
