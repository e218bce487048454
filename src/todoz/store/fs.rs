use super::{Snapshot, SnapshotStore};
use crate::error::{Result, TodozError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores the whole list as one JSON document.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TodozError::Io)?;
            }
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no snapshot yet, starting empty");
            return Ok(Snapshot::default());
        }
        let content = fs::read_to_string(&self.path).map_err(TodozError::Io)?;
        Ok(Snapshot::from_json(&content))
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.ensure_parent()?;
        let content = snapshot.to_json()?;
        fs::write(&self.path, content).map_err(TodozError::Io)?;
        debug!(path = %self.path.display(), todos = snapshot.todos.len(), "snapshot saved");
        Ok(())
    }
}
