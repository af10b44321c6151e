//! Board store: the owner of the canonical in-memory board.

use crate::board::{
    domain::{Board, BoardMutation, ColumnSet, ColumnSnapshot},
    ports::{BoardSource, BoardSourceError},
    transcoder,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Service-level errors for board store operations.
#[derive(Debug, Error)]
pub enum BoardStoreError {
    /// The board source failed.
    #[error(transparent)]
    Source(#[from] BoardSourceError),
}

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Builds a board from raw source text.
///
/// An absent source yields an empty board with every configured column.
#[must_use]
pub fn load_board(raw: Option<&str>, columns: &ColumnSet) -> Board {
    raw.map_or_else(|| Board::empty(columns), |text| transcoder::parse(text, columns))
}

/// Normalizes a board and renders it as source text.
#[must_use]
pub fn save_board(board: Board) -> String {
    transcoder::serialize(&board.normalized())
}

/// Owner of the canonical board and mediator between clients and the
/// board source.
///
/// Every operation runs under one async mutex, so loads, saves and
/// mutations are handled one at a time. Saves replace the whole source;
/// the last save wins and nothing is merged.
pub struct BoardStore<S>
where
    S: BoardSource,
{
    source: Arc<S>,
    columns: ColumnSet,
    board: Mutex<Board>,
}

impl<S> BoardStore<S>
where
    S: BoardSource,
{
    /// Creates a store holding an empty board.
    #[must_use]
    pub fn new(source: Arc<S>, columns: ColumnSet) -> Self {
        let board = Mutex::new(Board::empty(&columns));
        Self {
            source,
            columns,
            board,
        }
    }

    /// Returns the configured columns.
    #[must_use]
    pub const fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Returns a copy of the current in-memory board.
    pub async fn snapshot(&self) -> Board {
        self.board.lock().await.clone()
    }

    /// Re-reads the source and makes it the current board.
    ///
    /// A missing source is not an error and yields an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Source`] when the source cannot be read;
    /// the current board is left unchanged.
    pub async fn load(&self) -> BoardStoreResult<Board> {
        let mut current = self.board.lock().await;
        let raw = self.source.read().await.inspect_err(|err| {
            warn!(error = %err, "board source could not be read");
        })?;
        if raw.is_none() {
            debug!("board source missing, starting from an empty board");
        }

        let board = load_board(raw.as_deref(), &self.columns);
        debug!(tasks = board.task_count(), "board loaded");
        current.clone_from(&board);
        Ok(board)
    }

    /// Replaces the whole board with a client snapshot and persists it.
    ///
    /// Tasks under unknown columns are dropped before saving.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Source`] when the source cannot be
    /// written; the current board is left unchanged.
    pub async fn replace(&self, snapshot: ColumnSnapshot) -> BoardStoreResult<Board> {
        let unknown: Vec<&str> = snapshot
            .keys()
            .map(String::as_str)
            .filter(|name| !self.columns.contains(name))
            .collect();
        if !unknown.is_empty() {
            debug!(columns = ?unknown, "dropping tasks under unknown columns");
        }

        let board = Board::from_snapshot(&self.columns, snapshot);
        self.save(board).await
    }

    /// Normalizes `board`, persists it, and makes it the current board.
    ///
    /// Returns the board as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Source`] when the source cannot be
    /// written; the current board is left unchanged.
    pub async fn save(&self, board: Board) -> BoardStoreResult<Board> {
        let mut current = self.board.lock().await;
        let normalized = board.normalized();
        self.persist(&normalized).await?;
        current.clone_from(&normalized);
        Ok(normalized)
    }

    /// Applies a mutation to the current board and persists the result.
    ///
    /// A mutation that changes nothing is not written.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Source`] when the source cannot be
    /// written; the current board is left unchanged.
    pub async fn apply(&self, mutation: BoardMutation) -> BoardStoreResult<Board> {
        let mut current = self.board.lock().await;
        let label = mutation.label();
        let updated = mutation.apply(current.clone()).normalized();
        if updated == *current {
            debug!(op = label, "mutation left the board unchanged");
            return Ok(updated);
        }

        self.persist(&updated).await?;
        info!(op = label, tasks = updated.task_count(), "mutation applied");
        current.clone_from(&updated);
        Ok(updated)
    }

    async fn persist(&self, board: &Board) -> BoardStoreResult<()> {
        let text = transcoder::serialize(board);
        self.source.write(&text).await.inspect_err(|err| {
            warn!(error = %err, "board save failed");
        })?;
        info!(tasks = board.task_count(), bytes = text.len(), "board saved");
        Ok(())
    }
}
