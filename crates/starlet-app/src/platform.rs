//! OS directory resolution for the launcher.
//!
//! Configuration and logs live in the platform's config location (XDG on
//! Linux, Known Folders on Windows, Library on macOS) under `starlet/`.

use std::path::{Path, PathBuf};

/// Errors that can occur during platform operations.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,
    /// Directory creation failed.
    #[error("platform I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-user directories used by the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Holds the debug-build JSON log.
    pub log_dir: PathBuf,
}

const APP_NAME: &str = "starlet";

impl PlatformDirs {
    /// Resolve directories without creating them.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NoConfigDir`] if the OS does not expose a
    /// configuration directory.
    pub fn resolve() -> Result<Self, PlatformError> {
        let base = dirs::config_dir().ok_or(PlatformError::NoConfigDir)?;
        Ok(Self::resolve_with_root(&base))
    }

    /// Resolve directories under a custom base path.
    pub fn resolve_with_root(root: &Path) -> Self {
        let app_dir = root.join(APP_NAME);
        Self {
            config_dir: app_dir.join("config"),
            log_dir: app_dir.join("logs"),
        }
    }

    /// Create all directories on disk.
    pub fn create_dirs(&self) -> Result<(), PlatformError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}
