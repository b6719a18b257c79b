//! Store port for the remote, user-scoped task collection.

use crate::board::domain::{Task, TaskDraft, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Remote task collection contract.
///
/// Every operation is one uncached, unbatched round trip scoped to the
/// tasks of the currently signed-in user.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Fetches all tasks belonging to the current user, in stable
    /// collection order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Fetch`] when the round trip or the
    /// authentication backing it fails.
    async fn list(&self) -> TaskStoreResult<Vec<Task>>;

    /// Stores a new task built from a validated draft.
    ///
    /// The store assigns the identifier, the owner, and the creation
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Write`] when the write fails.
    async fn create(&self, draft: TaskDraft) -> TaskStoreResult<()>;

    /// Merges the patch fields into an existing task record.
    ///
    /// Board interactions only ever patch the status, but the contract
    /// merges whichever fields the patch carries.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the identifier does not
    /// exist, or [`TaskStoreError::Write`] when the write fails.
    async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<()>;

    /// Removes a task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the identifier does not
    /// exist, or [`TaskStoreError::Write`] when the write fails.
    async fn delete(&self, id: &TaskId) -> TaskStoreResult<()>;
}

/// Partial task record for merge-style updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    status: Option<TaskStatus>,
    title: Option<String>,
    description: Option<String>,
    completed: Option<bool>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            title: None,
            description: None,
            completed: None,
        }
    }

    /// Sets the status field.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the title field.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description field.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns the patched status, if set.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the patched title, if set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the patched description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the patched completion flag, if set.
    #[must_use]
    pub const fn completed(&self) -> Option<bool> {
        self.completed
    }

    /// Reports whether no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
    }
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Fetching the task list failed.
    #[error("failed to fetch tasks: {0}")]
    Fetch(Arc<dyn std::error::Error + Send + Sync>),

    /// A create, update, or delete round trip failed.
    #[error("failed to write task: {0}")]
    Write(Arc<dyn std::error::Error + Send + Sync>),

    /// The task targeted by a write does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

impl TaskStoreError {
    /// Wraps a transport or authentication failure from the fetch path.
    pub fn fetch(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Fetch(Arc::new(err))
    }

    /// Wraps a transport or authentication failure from the write path.
    pub fn write(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Write(Arc::new(err))
    }
}
