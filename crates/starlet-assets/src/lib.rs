//! Asset root handling for Starlet.
//!
//! All content files are resolved relative to a single asset root. Scenes
//! live under `<root>/scenes/` as RON files named after the scene.

mod error;
mod paths;

pub use error::AssetError;
pub use paths::{AssetPaths, SCENE_DIR, SCENE_EXTENSION, scene_name_problem};
