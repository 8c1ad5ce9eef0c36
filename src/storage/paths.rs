//! Application paths.

use directories::BaseDirs;
use std::path::PathBuf;

/// Credential file name, kept compatible with the Blinko agent skill.
pub const CONFIG_FILE_NAME: &str = "blinko.skill.yaml";

/// Application paths.
pub struct AppPaths {
    /// Configuration directory (`~/.config` on every platform).
    pub config: PathBuf,
}

impl AppPaths {
    /// Paths rooted at the current user's home directory.
    ///
    /// Returns `None` when the home directory cannot be determined.
    #[must_use]
    pub fn new() -> Option<Self> {
        BaseDirs::new().map(|dirs| Self::with_home(dirs.home_dir().to_path_buf()))
    }

    /// Paths rooted at an explicit home directory.
    #[must_use]
    pub fn with_home(home: PathBuf) -> Self {
        Self {
            config: home.join(".config"),
        }
    }

    /// Path to the credential file.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config.join(CONFIG_FILE_NAME)
    }
}
