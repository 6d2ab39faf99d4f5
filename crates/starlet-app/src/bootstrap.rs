//! The startup sequence: asset root, window context, scene, run loop.
//!
//! Expressed against the [`Runtime`] trait so the ordering and early exits
//! can be checked without opening a window.

use std::path::{Path, PathBuf};

use starlet_config::Config;
use starlet_engine::{Engine, EngineError};
use tracing::{error, info};

use crate::ASSET_DIR;

/// The operations the launcher needs from an engine.
pub trait Runtime {
    type Error: std::error::Error;

    fn set_asset_paths(&mut self, root: &Path);
    fn initialize(&mut self, width: u32, height: u32, title: &str) -> Result<(), Self::Error>;
    fn load_scene(&mut self, name: &str) -> Result<(), Self::Error>;
    fn run(&mut self) -> Result<(), Self::Error>;
}

impl Runtime for Engine {
    type Error = EngineError;

    fn set_asset_paths(&mut self, root: &Path) {
        Engine::set_asset_paths(self, root);
    }

    fn initialize(&mut self, width: u32, height: u32, title: &str) -> Result<(), EngineError> {
        Engine::initialize(self, width, height, title)
    }

    fn load_scene(&mut self, name: &str) -> Result<(), EngineError> {
        Engine::load_scene(self, name)
    }

    fn run(&mut self) -> Result<(), EngineError> {
        Engine::run(self)
    }
}

/// Everything [`launch`] feeds into the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    pub asset_root: PathBuf,
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub scene: String,
}

impl LaunchSettings {
    /// Settings from a resolved config. Without a configured asset root the
    /// build-time [`ASSET_DIR`] is used.
    pub fn from_config(config: &Config) -> Self {
        Self {
            asset_root: config
                .assets
                .root
                .clone()
                .unwrap_or_else(|| PathBuf::from(ASSET_DIR)),
            width: config.window.width,
            height: config.window.height,
            title: config.window.title.clone(),
            scene: config.scene.startup.clone(),
        }
    }
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// How the startup sequence ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The run loop returned normally.
    Exited,
    InitializeFailed,
    SceneLoadFailed,
    /// The run loop stopped on a window or GPU failure.
    RunFailed,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Exited => 0,
            Self::InitializeFailed | Self::SceneLoadFailed => -1,
            Self::RunFailed => 1,
        }
    }
}

/// Drives `runtime` through the startup sequence, stopping at the first failure.
pub fn launch<R: Runtime>(runtime: &mut R, settings: &LaunchSettings) -> Outcome {
    runtime.set_asset_paths(&settings.asset_root);

    if let Err(e) = runtime.initialize(settings.width, settings.height, &settings.title) {
        error!("Initialization failed: {e}");
        return Outcome::InitializeFailed;
    }

    if let Err(e) = runtime.load_scene(&settings.scene) {
        error!("Failed to load scene {:?}: {e}", settings.scene);
        return Outcome::SceneLoadFailed;
    }

    match runtime.run() {
        Ok(()) => {
            info!("Shut down cleanly");
            Outcome::Exited
        }
        Err(e) => {
            error!("Run loop failed: {e}");
            Outcome::RunFailed
        }
    }
}
