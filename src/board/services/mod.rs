//! Application services for board synchronisation.

mod store;

pub use store::{BoardStore, BoardStoreError, BoardStoreResult, load_board, save_board};
