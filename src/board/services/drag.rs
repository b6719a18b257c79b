//! Drag-and-drop status transition state machine.

use crate::board::domain::{Task, TaskId, TaskStatus};

/// Drag lifecycle state.
///
/// At most one task is the active payload; starting a new drag while one
/// is active overwrites it rather than queueing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No task is being dragged.
    #[default]
    Idle,
    /// The contained task is the active drag payload.
    Dragging(Task),
}

/// Status mutation requested by dropping a task onto a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    task_id: TaskId,
    status: TaskStatus,
}

impl StatusChange {
    /// Returns the task to patch.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the status the drop column maps to.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}

/// Tracks the dragged task and the hovered column between drag events.
///
/// The payload is state owned by this controller instance, not ambient
/// shared state; callers hand the task in on `drag_start` and receive a
/// [`StatusChange`] request back from `drop_on`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragController {
    state: DragState,
    hovered: Option<TaskStatus>,
}

impl DragController {
    /// Creates a controller in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins dragging a task, replacing any active payload.
    pub fn drag_start(&mut self, task: Task) {
        self.state = DragState::Dragging(task);
    }

    /// Marks the column the payload is hovering over.
    ///
    /// The marker is purely presentational; it has no effect on the drop
    /// outcome.
    pub fn drag_over(&mut self, column: TaskStatus) {
        self.hovered = Some(column);
    }

    /// Converts a drop on a column into a status-change request.
    ///
    /// Returns `None` when nothing is being dragged. The hovered marker
    /// is cleared and the controller returns to idle either way; whether
    /// the requested mutation later succeeds is the caller's concern. A
    /// drop onto the column that already matches the task's status still
    /// produces the request.
    pub fn drop_on(&mut self, column: TaskStatus) -> Option<StatusChange> {
        self.hovered = None;
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging(task) => Some(StatusChange {
                task_id: task.id().clone(),
                status: column,
            }),
        }
    }

    /// Ends the drag without a drop, clearing payload and marker.
    ///
    /// Covers cancellation, e.g. releasing the task outside any column.
    pub fn drag_end(&mut self) {
        self.state = DragState::Idle;
        self.hovered = None;
    }

    /// Returns the active drag payload, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&Task> {
        match &self.state {
            DragState::Dragging(task) => Some(task),
            DragState::Idle => None,
        }
    }

    /// Reports whether a drag is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Returns the presentational drag-target column, if any.
    #[must_use]
    pub const fn hovered_column(&self) -> Option<TaskStatus> {
        self.hovered
    }
}
