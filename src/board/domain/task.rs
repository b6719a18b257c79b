//! Task aggregate root and the validated draft used to create one.

use super::{BoardDomainError, ParseTaskStatusError, TaskId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status, the sole determinant of the column a task is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Work has not started.
    Pending,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Completed,
}

impl TaskStatus {
    /// All statuses in board column order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task aggregate root.
///
/// Tasks are born remotely: the store assigns the identifier, the owner,
/// and the creation timestamp, so the only way to obtain a `Task` is to
/// reconstruct one from a fetched record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner: UserId,
    title: String,
    description: String,
    status: TaskStatus,
    completed: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a task fetched from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    /// Store-assigned task identifier.
    pub id: TaskId,
    /// Owning user reference.
    pub owner: UserId,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Column-determining status.
    pub status: TaskStatus,
    /// Stored completion flag (redundant with status).
    pub completed: bool,
    /// Creation timestamp stamped by the store.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from a stored record.
    #[must_use]
    pub fn from_record(record: TaskRecord) -> Self {
        Self {
            id: record.id,
            owner: record.owner,
            title: record.title,
            description: record.description,
            status: record.status,
            completed: record.completed,
            created_at: record.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the owning user reference.
    #[must_use]
    pub const fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the column-determining status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the stored completion flag.
    ///
    /// The flag is redundant with [`status`](Self::status) and is not
    /// touched by status patches; it exists because the stored records
    /// carry it.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Validated payload for creating a task.
///
/// Construction trims and rejects empty titles and descriptions, so a
/// draft that reaches the store always carries usable user input. Status
/// and the completion flag hold their creation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    title: String,
    description: String,
    status: TaskStatus,
    completed: bool,
}

impl TaskDraft {
    /// Creates a draft from raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] or
    /// [`BoardDomainError::EmptyDescription`] when the trimmed value is
    /// empty.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, BoardDomainError> {
        let raw_title = title.into();
        let trimmed_title = raw_title.trim();
        if trimmed_title.is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }

        let raw_description = description.into();
        let trimmed_description = raw_description.trim();
        if trimmed_description.is_empty() {
            return Err(BoardDomainError::EmptyDescription);
        }

        Ok(Self {
            title: trimmed_title.to_owned(),
            description: trimmed_description.to_owned(),
            status: TaskStatus::Pending,
            completed: false,
        })
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the trimmed description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation-default status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation-default completion flag.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }
}
