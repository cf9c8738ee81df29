//! Database layer for the taskman application.
//!
//! Persists tasks in a single SQLite table and owns every SQL statement in
//! the crate. Schema changes go through the versioned migration system; the
//! listing query is assembled from bound-parameter clauses in [`query`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::db::{db::Db, query::list_tasks, tasks::Tasks};
//! use taskman::libs::task::{NewTask, Priority, TaskFilter};
//!
//! let mut tasks = Tasks::from(Db::in_memory()?);
//! tasks.create(&NewTask::new("Write report", Priority::High))?;
//! let found = list_tasks(&tasks, &TaskFilter::all().with_search("report"))?;
//! assert_eq!(found.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management and initialization.
///
/// Resolves the database file, applies the busy timeout and runs pending
/// migrations before handing out a connection.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Filtered, ordered task listing built from parameterized clauses.
pub mod query;

/// Task lifecycle operations: create, read, edit, complete, delete.
pub mod tasks;
