//! On-disk scene representation.
//!
//! ```ron
//! (
//!     name: "Hangar",
//!     clear_color: (0.05, 0.05, 0.1, 1.0),
//!     objects: [
//!         (name: "ship", position: (0.0, 1.0, -4.0), asset: Some("meshes/ship.obj")),
//!     ],
//! )
//! ```

use serde::{Deserialize, Serialize};

use crate::scene::DEFAULT_CLEAR_COLOR;

/// A scene file as written by hand or by tools.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneFile {
    /// Display name. Informational; scenes are identified by file name.
    /// Empty when the file does not declare one.
    pub name: String,
    /// Linear RGBA clear color.
    pub clear_color: [f64; 4],
    /// Scene objects in file order.
    pub objects: Vec<ObjectFile>,
}

/// One object entry in a [`SceneFile`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObjectFile {
    /// Unique name within the scene.
    pub name: String,
    /// World-space position.
    pub position: [f32; 3],
    /// Per-axis scale.
    pub scale: [f32; 3],
    /// Asset reference relative to the asset root.
    pub asset: Option<String>,
}

impl Default for SceneFile {
    fn default() -> Self {
        Self {
            name: String::new(),
            clear_color: DEFAULT_CLEAR_COLOR,
            objects: Vec::new(),
        }
    }
}

impl Default for ObjectFile {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: [0.0; 3],
            scale: [1.0; 3],
            asset: None,
        }
    }
}
