//! Markdown checklist transcoding.
//!
//! The file dialect is fixed:
//!
//! ```text
//! # Projects
//!
//! ## Backlog
//! - [ ] open task
//! - [x] finished task
//!
//! ## Active
//! ```
//!
//! Task identifiers are not written to the file, so
//! `parse(&serialize(&board), columns)` matches `board` in column order,
//! task text and done flags, but every task comes back with a new
//! identifier.

mod parser;
mod serializer;

pub use parser::parse;
pub use serializer::serialize;

/// First line of every rendered board file.
pub const PREAMBLE: &str = "# Projects";

/// Prefix marking a column heading line.
pub const HEADING_PREFIX: &str = "## ";

/// Prefix of an open task line.
pub const OPEN_TASK_PREFIX: &str = "- [ ] ";

/// Prefix of a finished task line.
pub const DONE_TASK_PREFIX: &str = "- [x] ";
