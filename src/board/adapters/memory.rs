//! In-memory board source for tests and embedding.

use crate::board::ports::{BoardSource, BoardSourceError, BoardSourceResult};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe board source held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardSource {
    contents: Arc<RwLock<Option<String>>>,
}

impl InMemoryBoardSource {
    /// Creates a source with no stored board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source holding `contents`.
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(RwLock::new(Some(contents.into()))),
        }
    }

    /// Returns a copy of the stored text, if any.
    ///
    /// A poisoned lock reads as an empty source.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }
}

#[async_trait]
impl BoardSource for InMemoryBoardSource {
    async fn read(&self) -> BoardSourceResult<Option<String>> {
        let guard = self
            .contents
            .read()
            .map_err(|err| BoardSourceError::read(std::io::Error::other(err.to_string())))?;
        Ok(guard.clone())
    }

    async fn write(&self, contents: &str) -> BoardSourceResult<()> {
        let mut guard = self
            .contents
            .write()
            .map_err(|err| BoardSourceError::write(std::io::Error::other(err.to_string())))?;
        *guard = Some(contents.to_owned());
        Ok(())
    }
}
