use crate::error::{Result, TodozError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "todos.json";

/// Configuration for todoz, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct TodozConfig {
    /// Snapshot file name (or path). Relative values live in the data directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Whether to style output when the terminal supports it
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            color: default_color(),
        }
    }
}

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodozError::Io)?;
        let config: TodozConfig =
            serde_json::from_str(&content).map_err(TodozError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodozError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodozError::Serialization)?;
        fs::write(config_path, content).map_err(TodozError::Io)?;
        Ok(())
    }

    /// Where the snapshot lives for this config.
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        let file = Path::new(&self.data_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.join(file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TodozConfig::default();
        assert_eq!(config.data_file, "todos.json");
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = TodozConfig::load(dir.path()).unwrap();
        assert_eq!(config, TodozConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = TodozConfig {
            data_file: "work.json".to_string(),
            color: false,
        };
        config.save(dir.path().join("sub")).unwrap();

        let loaded = TodozConfig::load(dir.path().join("sub")).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{ "color": false }"#).unwrap();

        let loaded = TodozConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "todos.json");
        assert!(!loaded.color);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(matches!(
            TodozConfig::load(dir.path()),
            Err(TodozError::Serialization(_))
        ));
    }

    #[test]
    fn test_data_path_resolution() {
        let config = TodozConfig::default();
        let dir = Path::new("/tmp/todoz-home");
        assert_eq!(config.data_path(dir), dir.join("todos.json"));

        let absolute = TodozConfig {
            data_file: "/var/lib/todos.json".to_string(),
            ..TodozConfig::default()
        };
        assert_eq!(absolute.data_path(dir), PathBuf::from("/var/lib/todos.json"));
    }
}
