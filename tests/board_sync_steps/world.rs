//! Shared world state for board synchronisation BDD scenarios.

use std::sync::Arc;

use camino::Utf8PathBuf;
use mdboard::board::{
    adapters::FileBoardSource,
    domain::{Board, ColumnSet},
    services::BoardStore,
};
use rstest::fixture;
use tempfile::TempDir;

/// Scenario world for board synchronisation behaviour tests.
pub struct BoardWorld {
    pub dir: TempDir,
    pub path: Utf8PathBuf,
    pub store: BoardStore<FileBoardSource>,
    pub loaded: Vec<Board>,
}

impl BoardWorld {
    /// Creates a world around a fresh temporary directory.
    ///
    /// # Panics
    ///
    /// Panics when the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temporary directory should be created");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("PROJECTS.md"))
            .expect("temporary path should be UTF-8");
        let source = FileBoardSource::open(&path).expect("board directory should open");
        let store = BoardStore::new(Arc::new(source), ColumnSet::default());
        Self {
            dir,
            path,
            store,
            loaded: Vec::new(),
        }
    }

    /// Reads the board file from disk.
    pub fn read_file(&self) -> Result<String, eyre::Report> {
        std::fs::read_to_string(self.path.as_std_path())
            .map_err(|err| eyre::eyre!("cannot read board file {}: {err}", self.path))
    }

    /// Returns the most recently loaded or saved board.
    pub fn last_board(&self) -> Result<&Board, eyre::Report> {
        self.loaded
            .last()
            .ok_or_else(|| eyre::eyre!("no board recorded in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
