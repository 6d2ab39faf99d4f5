//! Errors from reading and writing `config.ron`.

use std::path::PathBuf;

/// Failure to load or persist the Starlet configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config directory or file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid Starlet config.
    #[error("invalid config in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("cannot serialize config: {0}")]
    Serialize(#[source] ron::Error),
}
