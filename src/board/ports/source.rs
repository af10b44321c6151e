//! Source port for the raw board text.

use async_trait::async_trait;
use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board source operations.
pub type BoardSourceResult<T> = Result<T, BoardSourceError>;

/// Storage holding the canonical markdown text of a board.
///
/// A source is read whole and overwritten whole. Implementations must make
/// a write visible atomically: a concurrent reader sees either the old or
/// the new text, never a mix.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardSource: Send + Sync {
    /// Reads the full board text.
    ///
    /// Returns `None` when the source does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSourceError::Read`] when the source exists but cannot
    /// be read.
    async fn read(&self) -> BoardSourceResult<Option<String>>;

    /// Replaces the board text with `contents`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSourceError::Write`] when the new text cannot be
    /// stored. The previous text is left in place.
    async fn write(&self, contents: &str) -> BoardSourceResult<()>;
}

/// Errors returned by board source implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardSourceError {
    /// Reading the source failed.
    #[error("failed to read board source: {0}")]
    Read(Arc<io::Error>),

    /// Writing the source failed.
    #[error("failed to write board source: {0}")]
    Write(Arc<io::Error>),
}

impl BoardSourceError {
    /// Wraps a read failure.
    #[must_use]
    pub fn read(err: io::Error) -> Self {
        Self::Read(Arc::new(err))
    }

    /// Wraps a write failure.
    #[must_use]
    pub fn write(err: io::Error) -> Self {
        Self::Write(Arc::new(err))
    }
}
