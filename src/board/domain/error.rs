//! Error types for board domain configuration.

use thiserror::Error;

/// Errors returned while constructing a [`super::ColumnSet`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColumnSetError {
    /// No column names were supplied.
    #[error("a board needs at least one column")]
    Empty,

    /// A column name is empty after trimming.
    #[error("column names must not be blank")]
    BlankName,

    /// The same column name appears more than once.
    #[error("duplicate column name: {0}")]
    DuplicateName(String),
}
