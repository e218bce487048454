use crate::api::Dispatcher;
use crate::config::TodozConfig;
use crate::error::{Result, TodozError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "TODOZ_HOME";

pub struct TodozContext {
    pub dispatcher: Dispatcher<FileStore>,
    pub config: TodozConfig,
    pub data_path: PathBuf,
}

/// `$TODOZ_HOME` when set and non-empty, otherwise the platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "todoz", "todoz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TodozError::Store("Could not determine a data directory".to_string()))
}

/// Loads config from `data_dir` and opens the snapshot. `file_override` (from `--file`)
/// wins over the configured data file. A broken config file falls back to defaults.
pub fn initialize(data_dir: &Path, file_override: Option<PathBuf>) -> TodozContext {
    let config = TodozConfig::load(data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        TodozConfig::default()
    });

    let data_path = file_override.unwrap_or_else(|| config.data_path(data_dir));
    debug!(path = %data_path.display(), "using snapshot file");

    let dispatcher = Dispatcher::new(FileStore::new(&data_path));

    TodozContext {
        dispatcher,
        config,
        data_path,
    }
}
