//! Markdown file board source backed by `cap-std`.
//!
//! The adapter holds a capability for the directory containing the board
//! file and never touches paths outside it. Writes go to a hidden sibling
//! file first and are then renamed over the board file, so readers never
//! see a partially written board.

use crate::board::ports::{BoardSource, BoardSourceError, BoardSourceResult};
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

/// Board source reading and writing a single markdown file.
#[derive(Debug, Clone)]
pub struct FileBoardSource {
    dir: Arc<Dir>,
    file_name: String,
}

impl FileBoardSource {
    /// Opens the directory containing `path`.
    ///
    /// The board file itself does not need to exist yet. An existing file is
    /// resolved first, so a symlinked board file is read and written through
    /// to its target.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when `path` has no file name, cannot be resolved,
    /// or its parent directory cannot be opened.
    pub fn open(path: &Utf8Path) -> io::Result<Self> {
        let resolved = resolve(path)?;
        let file_name = resolved
            .file_name()
            .ok_or_else(|| io::Error::other(format!("board path '{path}' has no file name")))?;
        let parent = resolved
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority())?;

        Ok(Self {
            dir: Arc::new(dir),
            file_name: file_name.to_owned(),
        })
    }

    fn staging_name(&self) -> String {
        format!(".{}.tmp", self.file_name)
    }
}

/// Follows symlinks of an existing board file; a missing file is kept as is.
fn resolve(path: &Utf8Path) -> io::Result<Utf8PathBuf> {
    match path.canonicalize_utf8() {
        Ok(resolved) => Ok(resolved),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(path.to_owned()),
        Err(err) => Err(err),
    }
}

fn read_optional(dir: &Dir, file_name: &str) -> io::Result<Option<String>> {
    match dir.read_to_string(file_name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

fn replace_file(dir: &Dir, staging: &str, file_name: &str, contents: &str) -> io::Result<()> {
    dir.write(staging, contents)?;
    if let Err(err) = dir.rename(staging, dir, file_name) {
        // Best effort: the staging file is useless once the rename failed.
        let _ignored = dir.remove_file(staging);
        return Err(err);
    }
    Ok(())
}

#[async_trait]
impl BoardSource for FileBoardSource {
    async fn read(&self) -> BoardSourceResult<Option<String>> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        tokio::task::spawn_blocking(move || read_optional(&dir, &file_name))
            .await
            .map_err(|err| BoardSourceError::read(io::Error::other(err)))?
            .map_err(BoardSourceError::read)
    }

    async fn write(&self, contents: &str) -> BoardSourceResult<()> {
        let dir = Arc::clone(&self.dir);
        let staging = self.staging_name();
        let file_name = self.file_name.clone();
        let owned = contents.to_owned();
        tokio::task::spawn_blocking(move || replace_file(&dir, &staging, &file_name, &owned))
            .await
            .map_err(|err| BoardSourceError::write(io::Error::other(err)))?
            .map_err(BoardSourceError::write)
    }
}
