//! Shared fixtures and test doubles for board unit tests.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::{Clock, DefaultClock};

use crate::board::{
    domain::{Task, TaskDraft, TaskId, TaskRecord, TaskStatus, UserId},
    ports::{TaskPatch, TaskStore, TaskStoreResult, UserIdentity},
};

mockall::mock! {
    /// Mocked remote task store for call-sequence and failure-path tests.
    pub Store {}

    #[async_trait]
    impl TaskStore for Store {
        async fn list(&self) -> TaskStoreResult<Vec<Task>>;
        async fn create(&self, draft: TaskDraft) -> TaskStoreResult<()>;
        async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<()>;
        async fn delete(&self, id: &TaskId) -> TaskStoreResult<()>;
    }
}

/// Identity used by most scenarios.
pub fn user() -> UserIdentity {
    UserIdentity::new("user-1", "user-1@example.com")
}

/// Builds a displayable task owned by [`user`].
pub fn task(id: &str, status: TaskStatus) -> Task {
    Task::from_record(TaskRecord {
        id: TaskId::new(id),
        owner: UserId::new("user-1"),
        title: format!("task {id}"),
        description: format!("description for task {id}"),
        status,
        completed: false,
        created_at: DefaultClock.utc(),
    })
}

/// Clock pinned to an instant that tests can advance manually.
pub struct FixedClock {
    now: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    /// Creates a clock stopped at the current wall-clock time.
    pub fn stopped() -> Self {
        Self {
            now: RwLock::new(DefaultClock.utc()),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.write().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(PoisonError::into_inner)
    }
}
