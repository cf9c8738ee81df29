//! Display implementation for taskman messages.
//!
//! All user-facing text lives here, keyed by [`Message`] variant, so
//! commands and views never embed literal strings.

use super::types::Message;
use crate::libs::formatter::plural_days;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, title) => format!("Task #{} '{}' created successfully", id, title),
            Message::TaskUpdated(id) => format!("Task #{} updated successfully", id),
            Message::TaskCompleted(title) => format!("Task '{}' marked as completed", title),
            Message::TaskAlreadyCompleted(title) => format!("Task '{}' is already completed", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted successfully", title),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TaskUnreadable(id, reason) => format!("Task with ID {} has invalid stored data: {}", id, reason),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete '{}'?", title),
            Message::TaskDeleteIrreversible => "This action cannot be undone.".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::EditingTask(title) => format!("Editing task: {}", title),
            Message::ValidationFailed => "Please fix the following errors:".to_string(),
            Message::StorageUnavailable(error) => format!("Task storage is unavailable: {}", error),

            // === LISTING MESSAGES ===
            Message::TasksHeader => "Tasks".to_string(),
            Message::NoTasksYet => "You haven't created any tasks yet. Run `taskman add` to get started.".to_string(),
            Message::NoTasksMatchFilters => "No tasks match your current filters. Try adjusting your search criteria.".to_string(),
            Message::SummaryHeader => "Summary".to_string(),
            Message::NoDescription => "No description".to_string(),
            Message::NoDescriptionProvided => "No description provided for this task.".to_string(),
            Message::NoDueDate => "No due date".to_string(),

            // === DUE DATE MESSAGES ===
            Message::UrgencyOverdue => "Overdue".to_string(),
            Message::UrgencyDueSoon => "Due soon".to_string(),
            Message::OverdueBy(days) => format!("Overdue by {} {}", days, plural_days(*days)),
            Message::DueToday => "Due today!".to_string(),
            Message::DueIn(days) => format!("Due in {} {}", days, plural_days(*days)),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD, empty for none)".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptDatabasePath => "Database file path (empty for default)".to_string(),
            Message::PromptBusyTimeout => "Busy timeout in milliseconds".to_string(),
            Message::PromptDateFormat => "Date format".to_string(),
            Message::PromptTimestampFormat => "Timestamp format".to_string(),
            Message::PromptDescriptionWidth => "Description column width".to_string(),
            Message::InvalidDateFormat(format) => format!("'{}' is not a valid date format", format),

            // === HEALTH MESSAGES ===
            Message::HealthHealthy => "Status: healthy".to_string(),
            Message::HealthUnhealthy => "Status: unhealthy".to_string(),
            Message::HealthDatabase(state) => format!("Database: {}", state),
            Message::HealthDisk(usage, state) => format!("Disk: {:.2}% used ({})", usage, state),
            Message::HealthDiskUnavailable => "Disk: usage unavailable".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };

        write!(f, "{}", text)
    }
}
