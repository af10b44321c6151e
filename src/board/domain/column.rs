//! Configured column list.

use super::ColumnSetError;
use serde::Serialize;

/// Column names used by the reference deployment.
const DEFAULT_COLUMNS: [&str; 3] = ["Backlog", "Active", "Done"];

/// Ordered list of recognized column names.
///
/// The order is the pipeline order: new tasks land in the first column and
/// the markdown file lists columns top to bottom in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColumnSet(Vec<String>);

impl ColumnSet {
    /// Creates a validated column set.
    ///
    /// Names are trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnSetError::Empty`] when no names are given,
    /// [`ColumnSetError::BlankName`] when a name is blank, and
    /// [`ColumnSetError::DuplicateName`] when a name repeats.
    pub fn new<I, S>(names: I) -> Result<Self, ColumnSetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut columns: Vec<String> = Vec::new();
        for name in names {
            let trimmed = name.as_ref().trim();
            if trimmed.is_empty() {
                return Err(ColumnSetError::BlankName);
            }
            if columns.iter().any(|existing| existing == trimmed) {
                return Err(ColumnSetError::DuplicateName(trimmed.to_owned()));
            }
            columns.push(trimmed.to_owned());
        }

        if columns.is_empty() {
            return Err(ColumnSetError::Empty);
        }
        Ok(Self(columns))
    }

    /// Returns the column names in pipeline order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Returns whether `name` is a recognized column.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|column| column == name)
    }
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self(DEFAULT_COLUMNS.iter().map(|name| (*name).to_owned()).collect())
    }
}
