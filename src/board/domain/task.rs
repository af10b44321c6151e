//! Task entity.

use super::TaskId;
use serde::{Deserialize, Serialize};

/// A single checklist entry on the board.
///
/// Task text is always held on one trimmed line, since each task renders
/// as exactly one markdown line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: String,
    done: bool,
}

impl Task {
    /// Creates a task with an existing identifier.
    ///
    /// Line breaks in `text` are folded into single spaces and the result
    /// is trimmed.
    #[must_use]
    pub fn new(id: TaskId, text: impl AsRef<str>, done: bool) -> Self {
        Self {
            id,
            text: single_line(text.as_ref()),
            done,
        }
    }

    /// Creates a task with a freshly generated identifier.
    #[must_use]
    pub fn with_fresh_id(text: impl AsRef<str>, done: bool) -> Self {
        Self::new(TaskId::generate(), text, done)
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the task is checked off.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    pub(crate) const fn toggle(&mut self) {
        self.done = !self.done;
    }

    pub(crate) fn reassign_id(&mut self, id: TaskId) {
        self.id = id;
    }

    /// Re-folds the text onto one trimmed line.
    ///
    /// Deserialized tasks bypass [`Task::new`].
    pub(crate) fn normalize_text(&mut self) {
        self.text = single_line(&self.text);
    }
}

/// Joins the trimmed, non-blank lines of `text` with single spaces.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
