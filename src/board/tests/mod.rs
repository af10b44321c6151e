//! Unit tests for the board context.


use crate::board::domain::{Board, ColumnSet};

/// Board contents with identifiers erased: `(column, [(text, done)])`.
pub(super) type ErasedBoard = Vec<(String, Vec<(String, bool)>)>;

/// Erases identifiers so boards can be compared across round trips.
pub(super) fn erase_ids(board: &Board) -> ErasedBoard {
    board
        .columns()
        .iter()
        .map(|column| {
            let tasks = column
                .tasks()
                .iter()
                .map(|task| (task.text().to_owned(), task.is_done()))
                .collect();
            (column.name().to_owned(), tasks)
        })
        .collect()
}

/// Builds an erased board from literal values.
pub(super) fn erased(columns: &[(&str, &[(&str, bool)])]) -> ErasedBoard {
    columns
        .iter()
        .map(|(name, tasks)| {
            let tasks = tasks
                .iter()
                .map(|(text, done)| ((*text).to_owned(), *done))
                .collect();
            ((*name).to_owned(), tasks)
        })
        .collect()
}

/// The reference column set.
pub(super) fn reference_columns() -> ColumnSet {
    ColumnSet::default()
}
