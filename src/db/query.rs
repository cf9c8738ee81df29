//! Filtered task listing.
//!
//! A [`TaskFilter`] is turned into a list of [`Clause`]s, one per active
//! filter. Each clause is a fixed SQL fragment containing only `?`
//! placeholders, paired with the values it binds. The clauses are joined
//! once with `AND`, so filter text can never become part of the SQL
//! string itself.
//!
//! ```text
//! search="report", status=Pending
//!   -> (title LIKE ? ESCAPE '\' OR description LIKE ? ESCAPE '\')   ["%report%", "%report%"]
//!   -> status = ?                                                   ["Pending"]
//!   => SELECT ... WHERE <c1> AND <c2> ORDER BY created_at DESC, id DESC
//! ```

use super::tasks::TaskStore;
use crate::libs::error::TaskResult;
use crate::libs::task::{Priority, Status, Task, TaskFilter};
use rusqlite::types::Value;

pub(crate) const SELECT_TASKS: &str = "SELECT id, title, description, priority, status, due_date, created_at, updated_at FROM tasks";
const ORDER_NEWEST_FIRST: &str = "ORDER BY created_at DESC, id DESC";

const SEARCH_CLAUSE: &str = "(title LIKE ? ESCAPE '\\' OR description LIKE ? ESCAPE '\\')";
const STATUS_CLAUSE: &str = "status = ?";
const PRIORITY_CLAUSE: &str = "priority = ?";

/// A single predicate and the values bound to its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    sql: &'static str,
    params: Vec<Value>,
}

impl Clause {
    /// Substring match on title or description.
    pub fn search(text: &str) -> Self {
        let pattern = format!("%{}%", escape_like(text));
        Clause {
            sql: SEARCH_CLAUSE,
            params: vec![Value::Text(pattern.clone()), Value::Text(pattern)],
        }
    }

    pub fn status(status: Status) -> Self {
        Clause {
            sql: STATUS_CLAUSE,
            params: vec![Value::Text(status.label().to_string())],
        }
    }

    pub fn priority(priority: Priority) -> Self {
        Clause {
            sql: PRIORITY_CLAUSE,
            params: vec![Value::Text(priority.label().to_string())],
        }
    }

    pub fn sql(&self) -> &'static str {
        self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

/// Rendered SELECT statement for a filter.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskQuery {
    sql: String,
    params: Vec<Value>,
}

impl TaskQuery {
    pub fn from_filter(filter: &TaskFilter) -> Self {
        let clauses = clauses(filter);

        let mut sql = String::from(SELECT_TASKS);
        if !clauses.is_empty() {
            let predicates: Vec<&str> = clauses.iter().map(Clause::sql).collect();
            sql.push_str(" WHERE ");
            sql.push_str(&predicates.join(" AND "));
        }
        sql.push(' ');
        sql.push_str(ORDER_NEWEST_FIRST);

        let params: Vec<Value> = clauses.into_iter().flat_map(|clause| clause.params).collect();
        debug_assert_eq!(sql.matches('?').count(), params.len());

        TaskQuery { sql, params }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

/// Lists tasks matching every active filter, newest first.
///
/// An empty result is `Ok(vec![])`; only storage failures are errors.
pub fn list_tasks<S: TaskStore + ?Sized>(store: &S, filter: &TaskFilter) -> TaskResult<Vec<Task>> {
    store.query(filter)
}

fn clauses(filter: &TaskFilter) -> Vec<Clause> {
    let mut clauses = Vec::new();
    if let Some(text) = filter.search.as_deref().filter(|text| !text.is_empty()) {
        clauses.push(Clause::search(text));
    }
    if let Some(status) = filter.status {
        clauses.push(Clause::status(status));
    }
    if let Some(priority) = filter.priority {
        clauses.push(Clause::priority(priority));
    }
    clauses
}

/// Makes LIKE wildcards in user text match literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
