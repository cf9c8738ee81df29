//! Due-date urgency classification.
//!
//! Urgency is derived at display time from a task's due date, its status
//! and a caller-supplied "now"; it is never stored. Day counts are
//! calendar-day differences between `now.date()` and the due date, so a
//! task due tomorrow is always exactly one day away whatever the time of
//! day.
//!
//! | due date                      | bucket     | days             |
//! |-------------------------------|------------|------------------|
//! | none, or task completed       | `None`     | 0                |
//! | before today                  | `Overdue`  | days elapsed (≥1)|
//! | today ..= today + 3           | `DueSoon`  | days remaining   |
//! | after today + 3               | `Upcoming` | days remaining   |

use super::task::{Status, Task};
use chrono::{NaiveDate, NaiveDateTime};

/// Inclusive window, in days from today, that counts as "due soon".
pub const DUE_SOON_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrgencyBucket {
    None,
    Overdue,
    DueSoon,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    None,
    Overdue { days: i64 },
    DueSoon { days: i64 },
    Upcoming { days: i64 },
}

impl Urgency {
    pub fn classify(due_date: Option<NaiveDate>, status: Status, now: NaiveDateTime) -> Self {
        let Some(due_date) = due_date else {
            return Urgency::None;
        };
        if status == Status::Completed {
            return Urgency::None;
        }

        let days = (due_date - now.date()).num_days();
        if days < 0 {
            Urgency::Overdue { days: -days }
        } else if days <= DUE_SOON_DAYS {
            Urgency::DueSoon { days }
        } else {
            Urgency::Upcoming { days }
        }
    }

    pub fn classify_task(task: &Task, now: NaiveDateTime) -> Self {
        Self::classify(task.due_date, task.status, now)
    }

    pub fn bucket(&self) -> UrgencyBucket {
        match self {
            Urgency::None => UrgencyBucket::None,
            Urgency::Overdue { .. } => UrgencyBucket::Overdue,
            Urgency::DueSoon { .. } => UrgencyBucket::DueSoon,
            Urgency::Upcoming { .. } => UrgencyBucket::Upcoming,
        }
    }

    /// Days overdue or remaining; 0 when there is no urgency.
    pub fn days(&self) -> i64 {
        match *self {
            Urgency::None => 0,
            Urgency::Overdue { days } | Urgency::DueSoon { days } | Urgency::Upcoming { days } => days,
        }
    }
}
