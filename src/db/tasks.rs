use super::db::Db;
use super::query::{TaskQuery, SELECT_TASKS};
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::task::{read_due_date, NewTask, Task, TaskFilter, TaskPatch, DATE_FORMAT};
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use tracing::{debug, warn};

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, priority, status, due_date, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";

/// Read capability the listing depends on.
pub trait TaskStore {
    fn query(&self, filter: &TaskFilter) -> TaskResult<Vec<Task>>;
}

pub struct Tasks {
    pub conn: Connection,
}

impl From<Db> for Tasks {
    fn from(db: Db) -> Self {
        Tasks { conn: db.conn }
    }
}

impl Tasks {
    pub fn new() -> anyhow::Result<Tasks> {
        Ok(Tasks::from(Db::new()?))
    }

    pub fn create(&mut self, task: &NewTask) -> TaskResult<i64> {
        self.create_at(task, Local::now().naive_local())
    }

    /// Inserts with an explicit creation time; both timestamps get `at`.
    pub fn create_at(&mut self, task: &NewTask, at: NaiveDateTime) -> TaskResult<i64> {
        task.validate()?;

        self.conn.execute(
            INSERT_TASK,
            params![task.title, task.description, task.priority, task.status, format_due_date(task.due_date), at],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, title = %task.title, "task created");

        Ok(id)
    }

    pub fn find(&self, id: i64) -> TaskResult<Option<Task>> {
        let task = self
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_TASKS), params![id], task_from_row)
            .optional()
            .map_err(|e| unreadable(id, e))?;

        Ok(task)
    }

    pub fn get(&self, id: i64) -> TaskResult<Task> {
        self.find(id)?.ok_or(TaskError::NotFound(id))
    }

    /// Applies a partial edit and returns the stored result.
    ///
    /// Only present fields are validated and written. A non-empty patch
    /// always refreshes `updated_at`; an empty one is a no-op read.
    pub fn update(&mut self, id: i64, patch: &TaskPatch) -> TaskResult<Task> {
        let patch = patch.normalized();
        patch.validate()?;

        if patch.is_empty() {
            return self.get(id);
        }

        let mut assignments: Vec<&'static str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(title) = &patch.title {
            assignments.push("title = ?");
            values.push(Value::Text(title.clone()));
        }
        if let Some(description) = &patch.description {
            assignments.push("description = ?");
            values.push(Value::Text(description.clone()));
        }
        if let Some(priority) = patch.priority {
            assignments.push("priority = ?");
            values.push(Value::Text(priority.label().to_string()));
        }
        if let Some(status) = patch.status {
            assignments.push("status = ?");
            values.push(Value::Text(status.label().to_string()));
        }
        if let Some(due_date) = patch.due_date {
            assignments.push("due_date = ?");
            values.push(format_due_date(due_date).map(Value::Text).unwrap_or(Value::Null));
        }

        assignments.push("updated_at = ?");
        values.push(Value::Text(Local::now().naive_local().format("%F %T%.f").to_string()));
        values.push(Value::Integer(id));

        let sql = format!("UPDATE tasks SET {} WHERE id = ?", assignments.join(", "));
        let affected = self.conn.execute(&sql, params_from_iter(values.iter()))?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        debug!(id, fields = assignments.len() - 1, "task updated");

        self.get(id)
    }

    /// Marks a task completed.
    pub fn complete(&mut self, id: i64) -> TaskResult<Task> {
        self.update(id, &TaskPatch::complete())
    }

    /// Removes a single row; there is no undo.
    pub fn delete(&mut self, id: i64) -> TaskResult<()> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        debug!(id, "task deleted");

        Ok(())
    }

    pub fn count(&self) -> TaskResult<usize> {
        let count: i64 = self.conn.query_row(COUNT_TASKS, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl TaskStore for Tasks {
    fn query(&self, filter: &TaskFilter) -> TaskResult<Vec<Task>> {
        let query = TaskQuery::from_filter(filter);
        debug!(sql = query.sql(), params = query.params().len(), "listing tasks");

        let mut stmt = self.conn.prepare(query.sql())?;
        let rows = stmt.query_map(params_from_iter(query.params().iter()), |row| Ok((row.get::<_, i64>(0)?, task_from_row(row))))?;

        let mut tasks = Vec::new();
        for row in rows {
            let (id, task) = row?;
            match task {
                Ok(task) => tasks.push(task),
                // Malformed rows are skipped, not fatal
                Err(e) if is_data_error(&e) => warn!(id, error = %e, "skipping unreadable task row"),
                Err(e) => return Err(e.into()),
            }
        }

        Ok(tasks)
    }
}

fn format_due_date(due_date: Option<NaiveDate>) -> Option<String> {
    due_date.map(|date| date.format(DATE_FORMAT).to_string())
}

/// Errors caused by the stored values rather than by the connection.
fn is_data_error(error: &rusqlite::Error) -> bool {
    matches!(error, rusqlite::Error::FromSqlConversionFailure(..) | rusqlite::Error::InvalidColumnType(..))
}

fn unreadable(id: i64, error: rusqlite::Error) -> TaskError {
    if is_data_error(&error) {
        TaskError::InvalidRow { id, reason: error.to_string() }
    } else {
        TaskError::StorageUnavailable(error)
    }
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    let due_date: Option<String> = row.get(5)?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        priority: row.get(3)?,
        status: row.get(4)?,
        due_date: read_due_date(due_date.as_deref()),
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}
