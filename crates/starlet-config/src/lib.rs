//! Configuration system for Starlet.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line. Every section is defaulted, so older or partial config files
//! keep loading as new fields are added.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{AssetConfig, CONFIG_FILE_NAME, Config, DebugConfig, SceneConfig, WindowConfig};
pub use error::ConfigError;
