//! Wire types exchanged with the dashboard.

use crate::board::domain::{Board, ColumnSet, ColumnSnapshot, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Board payload: the column order plus the board itself.
#[derive(Debug, Clone, Serialize)]
pub struct BoardResponse {
    /// Column names in pipeline order.
    pub columns: ColumnSet,
    /// Tasks keyed by column name.
    pub board: Board,
}

/// Body of a whole-board save.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveBoardRequest {
    /// Tasks keyed by column name.
    pub board: BTreeMap<String, Vec<TaskPayload>>,
}

impl SaveBoardRequest {
    /// Converts the payload into a domain snapshot.
    #[must_use]
    pub fn into_snapshot(self) -> ColumnSnapshot {
        self.board
            .into_iter()
            .map(|(column, tasks)| (column, tasks.into_iter().map(Task::from).collect()))
            .collect()
    }
}

/// A task as sent by a client.
///
/// The identifier and done flag may be omitted; a missing or blank
/// identifier is replaced with a generated one.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPayload {
    /// Client-side identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Task text.
    pub text: String,
    /// Whether the task is checked off.
    #[serde(default)]
    pub done: bool,
}

impl From<TaskPayload> for Task {
    fn from(payload: TaskPayload) -> Self {
        match payload.id.filter(|id| !id.trim().is_empty()) {
            Some(id) => Self::new(TaskId::new(id), payload.text, payload.done),
            None => Self::with_fresh_id(payload.text, payload.done),
        }
    }
}

/// Outcome of a whole-board save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    /// Whether the board was written.
    pub success: bool,
}

/// Server configuration visible to the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigResponse {
    /// Column names in pipeline order.
    pub columns: ColumnSet,
    /// Board file path.
    pub file: String,
}

/// Error body for rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub error: String,
}
