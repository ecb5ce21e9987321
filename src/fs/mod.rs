//! File system locations and the optional config file.

use std::path::{Path, PathBuf};

pub mod config;

pub use config::{ConfigError, DEFAULT_TICK_MS, PomochatConfig, load_config};

/// Name of the per-directory folder holding the config file and logs.
pub const POMOCHAT_DIR: &str = ".pomochat";

/// All pomochat paths derived from a base directory.
///
/// Tests root this at a temporary directory instead of the working
/// directory.
///
/// ```
/// use std::path::Path;
/// use pomochat::fs::PomochatPaths;
///
/// let paths = PomochatPaths::new(Path::new("/tmp/test"));
/// assert_eq!(paths.config_file(), Path::new("/tmp/test/.pomochat/config.json"));
/// ```
#[derive(Debug, Clone)]
pub struct PomochatPaths {
    base: PathBuf,
}

impl PomochatPaths {
    #[must_use]
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }

    /// Paths rooted at the current working directory, or `.` if it cannot be
    /// determined.
    #[must_use]
    pub fn from_cwd() -> Self {
        Self {
            base: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Returns the `.pomochat` directory path.
    #[must_use]
    pub fn pomochat_dir(&self) -> PathBuf {
        self.base.join(POMOCHAT_DIR)
    }

    /// Returns the default config file path.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.pomochat_dir().join("config.json")
    }

    /// Returns the default log file path.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.pomochat_dir().join("pomochat.log")
    }
}
