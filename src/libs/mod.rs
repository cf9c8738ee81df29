//! Core library modules for the taskman application.
//!
//! ## Features
//!
//! - **Data Model**: Task fields, closed priority/status enums, validation
//! - **Presentation**: Due-date urgency, badges, per-status summaries
//! - **Infrastructure**: Configuration, data directory, error taxonomy, messages
//! - **User Interface**: Terminal tables, date formatting, health report
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::Local;
//! use taskman::libs::summary::TaskSummary;
//! use taskman::libs::urgency::Urgency;
//! # let tasks: Vec<taskman::libs::task::Task> = Vec::new();
//!
//! let now = Local::now().naive_local();
//! for task in &tasks {
//!     let urgency = Urgency::classify_task(task, now);
//!     println!("{} {:?} {}", task.title, urgency.bucket(), urgency.days());
//! }
//! let summary = TaskSummary::from_tasks(&tasks);
//! assert_eq!(summary.total, tasks.len());
//! ```

pub mod badge;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod health;
pub mod messages;
pub mod summary;
pub mod task;
pub mod urgency;
pub mod view;
