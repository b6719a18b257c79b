//! Pure projection of a task list into the three display columns.

use super::{Task, TaskStatus};

/// Tasks grouped into the three fixed status columns.
///
/// Every task lands in exactly one column, chosen solely by its status;
/// the relative order inside a column follows the source list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnPartition {
    pending: Vec<Task>,
    in_progress: Vec<Task>,
    completed: Vec<Task>,
}

impl ColumnPartition {
    /// Returns the pending column.
    #[must_use]
    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    /// Returns the in-progress column.
    #[must_use]
    pub fn in_progress(&self) -> &[Task] {
        &self.in_progress
    }

    /// Returns the completed column.
    #[must_use]
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Returns the column holding tasks with the given status.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Pending => self.pending(),
            TaskStatus::InProgress => self.in_progress(),
            TaskStatus::Completed => self.completed(),
        }
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending
            .len()
            .saturating_add(self.in_progress.len())
            .saturating_add(self.completed.len())
    }

    /// Reports whether every column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.in_progress.is_empty() && self.completed.is_empty()
    }
}

/// Partitions tasks into their status columns, preserving source order.
#[must_use]
pub fn partition(tasks: &[Task]) -> ColumnPartition {
    let mut columns = ColumnPartition::default();
    for task in tasks {
        match task.status() {
            TaskStatus::Pending => columns.pending.push(task.clone()),
            TaskStatus::InProgress => columns.in_progress.push(task.clone()),
            TaskStatus::Completed => columns.completed.push(task.clone()),
        }
    }
    columns
}
