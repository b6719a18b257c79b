//! Root board service wiring the ports, reconciler, and drag controller.

use std::sync::Arc;

use mockable::Clock;

use crate::board::{
    domain::{ColumnPartition, Task, TaskDraft, TaskId, TaskStatus},
    ports::{AuthGateway, AuthState, AuthSubscription, TaskPatch, TaskStore},
    services::{BoardReconciler, DragController, Notice},
};

/// Client-side task board: reconciliation, drag transitions, notices.
///
/// Every user action funnels through here the same way: mutate through
/// the store, then reload the whole list. Failures never escape — each
/// becomes a transient [`Notice`] while the board keeps its last good
/// state. Overlapping operations are not serialized; the last reload to
/// resolve wins.
pub struct TaskBoard<S, A, C>
where
    S: TaskStore,
    A: AuthGateway,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    reconciler: BoardReconciler<S, A>,
    drag: DragController,
    notice: Option<Notice>,
    auth_events: AuthSubscription,
}

impl<S, A, C> TaskBoard<S, A, C>
where
    S: TaskStore,
    A: AuthGateway,
    C: Clock + Send + Sync,
{
    /// Creates a board and subscribes to auth-state transitions.
    ///
    /// The subscription handle lives exactly as long as the board;
    /// dropping the board tears it down.
    #[must_use]
    pub fn new(store: Arc<S>, auth: Arc<A>, clock: Arc<C>) -> Self {
        let auth_events = auth.subscribe();
        Self {
            store: Arc::clone(&store),
            clock,
            reconciler: BoardReconciler::new(store, auth),
            drag: DragController::new(),
            notice: None,
            auth_events,
        }
    }

    /// Brings the board up against the current auth state.
    ///
    /// Loads the task list when a user is already signed in; otherwise
    /// leaves the board empty. Marks the current auth state as seen so
    /// [`await_auth_transition`](Self::await_auth_transition) only wakes
    /// on later transitions.
    pub async fn start(&mut self) {
        let state = self.auth_events.borrow_and_update().clone();
        self.apply_auth_state(&state).await;
    }

    /// Submits the create form.
    ///
    /// Validation failures raise a notice without issuing any store call;
    /// a created task shows up through the follow-up reload.
    pub async fn submit(&mut self, title: &str, description: &str) {
        let draft = match TaskDraft::new(title, description) {
            Ok(draft) => draft,
            Err(err) => {
                tracing::warn!(error = %err, "rejected task submission");
                self.raise_notice(err.to_string());
                return;
            }
        };

        if let Err(err) = self.store.create(draft).await {
            tracing::warn!(error = %err, "task creation failed");
            self.raise_notice(err.to_string());
            return;
        }
        self.refresh().await;
    }

    /// Deletes a task the user has confirmed removing.
    ///
    /// The confirmation dialog is the view's responsibility; by the time
    /// this runs the decision has been made.
    pub async fn remove_task(&mut self, id: &TaskId) {
        if let Err(err) = self.store.delete(id).await {
            tracing::warn!(error = %err, task_id = %id, "task deletion failed");
            self.raise_notice(err.to_string());
            return;
        }
        self.refresh().await;
    }

    /// Begins dragging a task card.
    pub fn drag_start(&mut self, task: Task) {
        self.drag.drag_start(task);
    }

    /// Marks the hovered column while a drag passes over it.
    pub fn drag_over(&mut self, column: TaskStatus) {
        self.drag.drag_over(column);
    }

    /// Ends a drag without a drop (the cancellation path).
    pub fn drag_end(&mut self) {
        self.drag.drag_end();
    }

    /// Drops the dragged task onto a column, patching its status.
    ///
    /// Dropping onto the task's current column still issues the
    /// idempotent patch and the follow-up reload. Without an active drag
    /// this is a no-op.
    pub async fn drop_on(&mut self, column: TaskStatus) {
        let Some(change) = self.drag.drop_on(column) else {
            return;
        };

        let patch = TaskPatch::new().with_status(change.status());
        if let Err(err) = self.store.update(change.task_id(), patch).await {
            tracing::warn!(error = %err, task_id = %change.task_id(), "status update failed");
            self.raise_notice(err.to_string());
            return;
        }
        self.refresh().await;
    }

    /// Applies an auth transition: sign-in reloads, sign-out clears.
    pub async fn apply_auth_state(&mut self, state: &AuthState) {
        if state.is_signed_in() {
            self.refresh().await;
        } else {
            self.reconciler.clear();
        }
    }

    /// Waits for the next auth transition and applies it.
    ///
    /// Returns the new state, or `None` once the gateway has shut down
    /// and no further transitions can arrive.
    pub async fn await_auth_transition(&mut self) -> Option<AuthState> {
        if self.auth_events.changed().await.is_err() {
            return None;
        }
        let state = self.auth_events.borrow_and_update().clone();
        self.apply_auth_state(&state).await;
        Some(state)
    }

    /// Returns the displayed tasks in fetch order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.reconciler.tasks()
    }

    /// Returns the current column projection.
    #[must_use]
    pub fn partition(&self) -> ColumnPartition {
        self.reconciler.partition()
    }

    /// Returns the displayed-list revision for view diffing.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.reconciler.revision()
    }

    /// Returns the active drag payload, if any.
    #[must_use]
    pub const fn drag_payload(&self) -> Option<&Task> {
        self.drag.payload()
    }

    /// Returns the presentational drag-target column, if any.
    #[must_use]
    pub const fn hovered_column(&self) -> Option<TaskStatus> {
        self.drag.hovered_column()
    }

    /// Returns the visible notice, if one is active and unexpired.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|notice| !notice.is_expired(&*self.clock))
    }

    /// Reloads the list, converting a failure into a notice.
    async fn refresh(&mut self) {
        if let Err(err) = self.reconciler.reload().await {
            tracing::warn!(error = %err, "task reload failed; keeping previous board state");
            self.raise_notice(err.to_string());
        }
    }

    fn raise_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::raise(message, &*self.clock));
    }
}
