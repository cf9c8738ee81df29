//! Display badges for priority and status.
//!
//! Each badge is a closed enum mirroring its source enum plus one explicit
//! `Unknown` arm. Typed values convert infallibly; raw labels that do not
//! parse (a row written by some other tool, say) land on `Unknown`
//! instead of failing the render.

use super::task::{Priority, Status};
use std::fmt;

/// Terminal colour of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Green,
    Yellow,
    Red,
    Blue,
    Grey,
    Dark,
}

impl BadgeColor {
    /// prettytable foreground style specifier.
    pub fn style_spec(&self) -> &'static str {
        match self {
            BadgeColor::Green => "Fg",
            BadgeColor::Yellow => "Fy",
            BadgeColor::Red => "Fr",
            BadgeColor::Blue => "Fb",
            BadgeColor::Grey => "Fw",
            BadgeColor::Dark => "Fd",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityBadge {
    Low,
    Medium,
    High,
    Unknown,
}

impl PriorityBadge {
    pub fn from_label(label: &str) -> Self {
        label.parse::<Priority>().map(Self::from).unwrap_or(PriorityBadge::Unknown)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriorityBadge::Low => "Low",
            PriorityBadge::Medium => "Medium",
            PriorityBadge::High => "High",
            PriorityBadge::Unknown => "Unknown",
        }
    }

    pub fn color(&self) -> BadgeColor {
        match self {
            PriorityBadge::Low => BadgeColor::Green,
            PriorityBadge::Medium => BadgeColor::Yellow,
            PriorityBadge::High => BadgeColor::Red,
            PriorityBadge::Unknown => BadgeColor::Grey,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PriorityBadge::Low => "↓",
            PriorityBadge::Medium | PriorityBadge::Unknown => "-",
            PriorityBadge::High => "↑",
        }
    }
}

impl From<Priority> for PriorityBadge {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => PriorityBadge::Low,
            Priority::Medium => PriorityBadge::Medium,
            Priority::High => PriorityBadge::High,
        }
    }
}

impl fmt::Display for PriorityBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Pending,
    InProgress,
    Completed,
    Unknown,
}

impl StatusBadge {
    pub fn from_label(label: &str) -> Self {
        label.parse::<Status>().map(Self::from).unwrap_or(StatusBadge::Unknown)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBadge::Pending => "Pending",
            StatusBadge::InProgress => "In Progress",
            StatusBadge::Completed => "Completed",
            StatusBadge::Unknown => "Unknown",
        }
    }

    pub fn color(&self) -> BadgeColor {
        match self {
            StatusBadge::Pending => BadgeColor::Grey,
            StatusBadge::InProgress => BadgeColor::Blue,
            StatusBadge::Completed => BadgeColor::Green,
            StatusBadge::Unknown => BadgeColor::Dark,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StatusBadge::Pending => "◷",
            StatusBadge::InProgress => "↻",
            StatusBadge::Completed => "✔",
            StatusBadge::Unknown => "?",
        }
    }
}

impl From<Status> for StatusBadge {
    fn from(status: Status) -> Self {
        match status {
            Status::Pending => StatusBadge::Pending,
            Status::InProgress => StatusBadge::InProgress,
            Status::Completed => StatusBadge::Completed,
        }
    }
}

impl fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
