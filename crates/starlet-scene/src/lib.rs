//! Scenes: named, loadable units of content stored as RON files under the
//! asset root, and the [`SceneManager`] that keeps one of them active.

mod error;
mod file;
mod manager;
mod scene;

pub use error::SceneError;
pub use file::{ObjectFile, SceneFile};
pub use manager::{SceneManager, validate_scene_name};
pub use scene::{DEFAULT_CLEAR_COLOR, Scene, SceneObject};
