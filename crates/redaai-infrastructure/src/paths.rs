//! Unified path management for redaai client files.
//!
//! All persisted client state lives under the platform configuration
//! directory:
//!
//! ```text
//! ~/.config/redaai/            # Linux; platform equivalent elsewhere
//! ├── session.json             # auth token namespace
//! └── preferences.json         # UI preferences namespace (theme flag)
//! ```

use std::path::{Path, PathBuf};

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolved application paths.
pub struct AppPaths {
    base: PathBuf,
}

impl AppPaths {
    /// Resolves the platform config directory for redaai.
    pub fn new() -> Result<Self, PathError> {
        let base = dirs::config_dir()
            .ok_or(PathError::ConfigDirNotFound)?
            .join("redaai");
        Ok(Self { base })
    }

    /// Creates paths rooted at a custom base directory (for testing).
    pub fn with_base(base: PathBuf) -> Self {
        Self { base }
    }

    /// The redaai configuration directory.
    pub fn config_dir(&self) -> &Path {
        &self.base
    }

    /// File holding the session namespace (auth token).
    pub fn session_file(&self) -> PathBuf {
        self.base.join("session.json")
    }

    /// File holding the preferences namespace (theme flag).
    pub fn preferences_file(&self) -> PathBuf {
        self.base.join("preferences.json")
    }
}
