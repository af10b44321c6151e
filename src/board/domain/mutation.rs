//! First-class board mutations.

use super::{Board, TaskId};
use serde::{Deserialize, Serialize};

/// A single edit a client can request against the current board.
///
/// Each variant maps onto one of the pure [`Board`] mutators. Stale
/// targets (unknown task or column) make the mutation a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BoardMutation {
    /// Move a task to the bottom of another column.
    Move {
        /// Task to move.
        task_id: TaskId,
        /// Column currently holding the task.
        from: String,
        /// Destination column.
        to: String,
    },
    /// Flip the done flag of a task.
    ToggleDone {
        /// Task to toggle.
        task_id: TaskId,
        /// Column holding the task.
        column: String,
    },
    /// Remove a task.
    Delete {
        /// Task to remove.
        task_id: TaskId,
        /// Column holding the task.
        column: String,
    },
    /// Append a new task to the intake column.
    Add {
        /// Task text, trimmed before use.
        text: String,
    },
}

impl BoardMutation {
    /// Applies the mutation to `board`.
    #[must_use]
    pub fn apply(self, board: Board) -> Board {
        match self {
            Self::Move { task_id, from, to } => board.move_task(&task_id, &from, &to),
            Self::ToggleDone { task_id, column } => board.toggle_done(&task_id, &column),
            Self::Delete { task_id, column } => board.delete_task(&task_id, &column),
            Self::Add { text } => board.add_task(&text),
        }
    }

    /// Returns a short label for logging.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Move { .. } => "move",
            Self::ToggleDone { .. } => "toggle_done",
            Self::Delete { .. } => "delete",
            Self::Add { .. } => "add",
        }
    }
}
