//! Adapter implementations of board ports.

pub mod file;
pub mod memory;

pub use file::FileBoardSource;
pub use memory::InMemoryBoardSource;
