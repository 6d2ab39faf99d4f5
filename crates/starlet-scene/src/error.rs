//! Scene loading error types.

use std::path::PathBuf;

use starlet_assets::AssetError;

/// Errors that can occur while loading or validating a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The scene name cannot be mapped to a scene file.
    #[error("invalid scene name {name:?}: {reason}")]
    InvalidName {
        /// Name as requested.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// No scene file exists for the name.
    #[error("scene {name:?} not found at {}", path.display())]
    NotFound {
        /// Requested scene name.
        name: String,
        /// Where the scene file was expected.
        path: PathBuf,
    },

    /// The scene file exists but could not be read.
    #[error("failed to read scene file {}: {source}", path.display())]
    Read {
        /// Scene file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The scene file is not valid RON for a scene.
    #[error("failed to parse scene file {}: {source}", path.display())]
    Parse {
        /// Scene file path.
        path: PathBuf,
        /// RON error with position information.
        #[source]
        source: ron::error::SpannedError,
    },

    /// An object in the scene has an empty name.
    #[error("object #{index} in scene {scene:?} has no name")]
    UnnamedObject {
        /// Scene being loaded.
        scene: String,
        /// Position of the object in the file.
        index: usize,
    },

    /// Two objects share a name.
    #[error("duplicate object {object:?} in scene {scene:?}")]
    DuplicateObject {
        /// Scene being loaded.
        scene: String,
        /// The repeated name.
        object: String,
    },

    /// An object references an asset that does not resolve.
    #[error("object {object:?} references an unusable asset: {source}")]
    MissingAsset {
        /// Object holding the reference.
        object: String,
        /// Resolution failure.
        #[source]
        source: AssetError,
    },
}
