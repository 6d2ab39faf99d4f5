//! Engine error types.

use starlet_assets::AssetError;
use starlet_render::{RenderContextError, SurfaceError};
use starlet_scene::SceneError;

use crate::engine::EngineState;

/// Errors reported by [`Engine`](crate::Engine) operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// `initialize` was called before `set_asset_paths`.
    #[error("asset paths must be set before initialization")]
    AssetPathsNotSet,

    /// `initialize` was called more than once.
    #[error("engine is already initialized")]
    AlreadyInitialized,

    /// A scene operation was attempted before `initialize`.
    #[error("engine is not initialized")]
    NotInitialized,

    /// `run` was called without a loaded scene.
    #[error("no scene has been loaded")]
    NoActiveScene,

    /// The operation is not allowed in the current lifecycle state.
    #[error("cannot {operation} while the engine is {state}")]
    InvalidState {
        operation: &'static str,
        state: EngineState,
    },

    /// Requested window width or height is zero.
    #[error("invalid window dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Requested window title is blank.
    #[error("window title must not be empty")]
    EmptyTitle,

    #[error(transparent)]
    Assets(#[from] AssetError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    /// The platform event loop could not be created or failed while running.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("GPU initialization failed: {0}")]
    Render(#[from] RenderContextError),

    /// An unrecoverable surface failure during rendering.
    #[error("surface failure: {0}")]
    Surface(#[from] SurfaceError),
}
