//! Board to markdown rendering.

use super::{DONE_TASK_PREFIX, HEADING_PREFIX, OPEN_TASK_PREFIX, PREAMBLE};
use crate::board::domain::Board;

/// Renders a board as markdown checklist text.
///
/// Columns appear in configured order, each one even when empty, separated
/// by a blank line. The output ends with exactly one newline. Identifiers
/// are not written.
#[must_use]
pub fn serialize(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(PREAMBLE);
    out.push_str("\n\n");

    for (index, column) in board.columns().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(HEADING_PREFIX);
        out.push_str(column.name());
        out.push('\n');
        for task in column.tasks() {
            let prefix = if task.is_done() {
                DONE_TASK_PREFIX
            } else {
                OPEN_TASK_PREFIX
            };
            out.push_str(prefix);
            out.push_str(task.text());
            out.push('\n');
        }
    }

    out
}
