//! Optional JSON config file (`.pomochat/config.json`).
//!
//! Every field is optional. A missing file is not an error and yields the
//! defaults; a file that exists but cannot be read or parsed is reported to
//! the caller, which shows a warning and carries on with the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default main-loop poll timeout in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 50;

/// Contents of the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PomochatConfig {
    /// Name shown next to the user's messages.
    pub username: Option<String>,
    /// Whether the task panel starts open.
    pub tasks_open: bool,
    /// Event poll timeout of the main loop.
    pub tick_ms: u64,
}

impl Default for PomochatConfig {
    fn default() -> Self {
        Self {
            username: None,
            tasks_open: false,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

/// Why a config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value in config file {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

/// Loads the config file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read, is not
/// valid JSON for [`PomochatConfig`], or holds an out-of-range value.
pub fn load_config(path: &Path) -> Result<PomochatConfig, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "config.missing");
        return Ok(PomochatConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: PomochatConfig =
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if config.tick_ms == 0 {
        return Err(ConfigError::Invalid {
            path: path.to_path_buf(),
            message: "tick_ms must be greater than zero".to_string(),
        });
    }
    if config.username.as_deref().is_some_and(|name| name.trim().is_empty()) {
        return Err(ConfigError::Invalid {
            path: path.to_path_buf(),
            message: "username must not be blank".to_string(),
        });
    }

    debug!(path = %path.display(), ?config, "config.loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> Result<PathBuf> {
        let path = dir.path().join("config.json");
        std::fs::write(&path, content)?;
        Ok(path)
    }

    #[test]
    fn missing_file_yields_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let config = load_config(&dir.path().join("nope.json"))?;
        assert_eq!(config, PomochatConfig::default());
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
        Ok(())
    }

    #[test]
    fn full_file_is_parsed() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_config(
            &dir,
            r#"{ "username": "joao", "tasks_open": true, "tick_ms": 100 }"#,
        )?;
        let config = load_config(&path)?;
        assert_eq!(config.username.as_deref(), Some("joao"));
        assert!(config.tasks_open);
        assert_eq!(config.tick_ms, 100);
        Ok(())
    }

    #[test]
    fn partial_file_keeps_other_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_config(&dir, r#"{ "tasks_open": true }"#)?;
        let config = load_config(&path)?;
        assert!(config.tasks_open);
        assert_eq!(config.username, None);
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
        Ok(())
    }

    #[test]
    fn malformed_json_is_parse_error() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_config(&dir, "{ not json")?;
        let err = load_config(&path).err();
        assert!(matches!(err, Some(ConfigError::Parse { .. })));
        Ok(())
    }

    #[test]
    fn unknown_field_is_parse_error() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_config(&dir, r#"{ "colour": "blue" }"#)?;
        assert!(matches!(load_config(&path), Err(ConfigError::Parse { .. })));
        Ok(())
    }

    #[test]
    fn zero_tick_is_invalid() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_config(&dir, r#"{ "tick_ms": 0 }"#)?;
        let err = load_config(&path).err().map(|e| e.to_string());
        assert!(err.is_some_and(|msg| msg.contains("tick_ms")));
        Ok(())
    }

    #[test]
    fn blank_username_is_invalid() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_config(&dir, r#"{ "username": "  " }"#)?;
        assert!(matches!(load_config(&path), Err(ConfigError::Invalid { .. })));
        Ok(())
    }

    #[test]
    fn directory_path_is_read_error() -> Result<()> {
        let dir = TempDir::new()?;
        assert!(matches!(
            load_config(dir.path()),
            Err(ConfigError::Read { .. })
        ));
        Ok(())
    }
}
