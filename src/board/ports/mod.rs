//! Port contracts for the board context.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod source;

pub use source::{BoardSource, BoardSourceError, BoardSourceResult};

#[cfg(test)]
pub use source::MockBoardSource;
