//! Services orchestrating the board over its ports.

mod board;
mod drag;
mod notice;
mod reconciler;

pub use board::TaskBoard;
pub use drag::{DragController, DragState, StatusChange};
pub use notice::Notice;
pub use reconciler::BoardReconciler;
