//! Starlet application launcher.
//!
//! Resolves configuration, sets up logging, and drives the engine through
//! its startup sequence.

pub mod bootstrap;
pub mod platform;

/// Asset directory baked in at build time: `STARLET_ASSET_DIR` if set when
/// compiling, otherwise the `assets` directory shipped with this crate.
pub const ASSET_DIR: &str = match option_env!("STARLET_ASSET_DIR") {
    Some(dir) => dir,
    None => concat!(env!("CARGO_MANIFEST_DIR"), "/assets"),
};
