//! Date and text formatting for terminal output.
//!
//! Formatting never fails: a missing due date renders as "No due date" and
//! urgency notes are chosen from the message catalogue so the wording stays
//! in one place.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use taskman::libs::formatter::{format_due_date, DEFAULT_DATE_FORMAT};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 9);
//! assert_eq!(format_due_date(date, DEFAULT_DATE_FORMAT), "Jun 09, 2024");
//! assert_eq!(format_due_date(None, DEFAULT_DATE_FORMAT), "No due date");
//! ```

use super::messages::Message;
use super::urgency::Urgency;
use chrono::format::{DelayedFormat, Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// "Jun 09, 2024"
pub const DEFAULT_DATE_FORMAT: &str = "%b %d, %Y";

/// "Jun 09, 2024 at 3:07 PM"
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%b %d, %Y at %-I:%M %p";

const ELLIPSIS: char = '…';

/// An unusable `format` falls back to [`DEFAULT_DATE_FORMAT`].
pub fn format_due_date(due_date: Option<NaiveDate>, format: &str) -> String {
    match due_date {
        Some(date) => render(|fmt| date.format(fmt), format, DEFAULT_DATE_FORMAT),
        None => Message::NoDueDate.to_string(),
    }
}

/// An unusable `format` falls back to [`DEFAULT_TIMESTAMP_FORMAT`].
pub fn format_timestamp(timestamp: &NaiveDateTime, format: &str) -> String {
    render(|fmt| timestamp.format(fmt), format, DEFAULT_TIMESTAMP_FORMAT)
}

/// Format strings come from the config file, so they may be invalid.
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

fn render<'a, F>(apply: F, format: &'a str, fallback: &'a str) -> String
where
    F: Fn(&'a str) -> DelayedFormat<StrftimeItems<'a>>,
{
    let mut out = String::new();
    if is_valid_format(format) && write!(out, "{}", apply(format)).is_ok() {
        return out;
    }

    out.clear();
    // Fallback formats are constants known to be valid
    let _ = write!(out, "{}", apply(fallback));
    out
}

/// Short label for list rows: "Overdue" / "Due soon".
pub fn urgency_label(urgency: &Urgency) -> Option<String> {
    match urgency {
        Urgency::Overdue { .. } => Some(Message::UrgencyOverdue.to_string()),
        Urgency::DueSoon { .. } => Some(Message::UrgencyDueSoon.to_string()),
        Urgency::None | Urgency::Upcoming { .. } => None,
    }
}

/// Sentence for the detail view, e.g. "Overdue by 2 days" or "Due today!".
pub fn urgency_note(urgency: &Urgency) -> Option<String> {
    let message = match *urgency {
        Urgency::None => return None,
        Urgency::Overdue { days } => Message::OverdueBy(days),
        Urgency::DueSoon { days: 0 } => Message::DueToday,
        Urgency::DueSoon { days } | Urgency::Upcoming { days } => Message::DueIn(days),
    };
    Some(message.to_string())
}

/// Cuts `text` to at most `width` characters, marking the cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push(ELLIPSIS);
    cut
}

pub fn plural_days(days: i64) -> &'static str {
    if days == 1 {
        "day"
    } else {
        "days"
    }
}
