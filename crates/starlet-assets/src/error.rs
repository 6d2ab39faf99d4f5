//! Asset error types.

use std::path::PathBuf;

/// Errors produced while resolving or reading assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The configured asset root does not exist or is not a directory.
    #[error("asset root {0} does not exist or is not a directory")]
    RootMissing(PathBuf),

    /// A relative asset reference was rejected before touching the filesystem.
    #[error("invalid asset path {path:?}: {reason}")]
    InvalidPath {
        /// The reference as written.
        path: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The resolved file does not exist.
    #[error("asset not found: {0}")]
    NotFound(PathBuf),

    /// Reading from the asset tree failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
