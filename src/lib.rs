//! # Taskman - command-line task tracker
//!
//! Tracks tasks with a title, description, priority, status and optional
//! due date in a local SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Create, view, edit, complete and delete tasks
//! - **Filtered Listing**: Search title/description, filter by status and priority
//! - **Due Date Tracking**: Overdue, due-soon and upcoming classification
//! - **Summaries**: Per-status counts for any listing
//! - **Health Checks**: Database connectivity and disk usage report
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
