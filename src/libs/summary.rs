//! Per-status tallies over a listing.

use super::task::{Status, Task};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl TaskSummary {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().map(|task| task.status).collect()
    }

    pub fn add(&mut self, status: Status) {
        self.total += 1;
        match status {
            Status::Pending => self.pending += 1,
            Status::InProgress => self.in_progress += 1,
            Status::Completed => self.completed += 1,
        }
    }

    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Pending => self.pending,
            Status::InProgress => self.in_progress,
            Status::Completed => self.completed,
        }
    }
}

impl FromIterator<Status> for TaskSummary {
    fn from_iter<I: IntoIterator<Item = Status>>(iter: I) -> Self {
        let mut summary = TaskSummary::default();
        for status in iter {
            summary.add(status);
        }
        summary
    }
}
