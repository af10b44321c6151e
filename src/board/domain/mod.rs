//! Domain model for the markdown task board.
//!
//! A board is an ordered set of configured columns, each holding an ordered
//! sequence of tasks. Every mutator is a pure transformation of a board
//! value; infrastructure concerns stay outside this boundary.

mod board;
mod column;
mod error;
mod ids;
mod mutation;
mod task;

pub use board::{Board, Column, ColumnSnapshot};
pub use column::ColumnSet;
pub use error::ColumnSetError;
pub use ids::TaskId;
pub use mutation::BoardMutation;
pub use task::Task;
