//! The [`Engine`] and its lifecycle.

use std::fmt;
use std::path::PathBuf;

use starlet_assets::AssetPaths;
use starlet_config::Config;
use starlet_scene::{Scene, SceneManager};
use tracing::{info, instrument, warn};
use winit::event_loop::{ControlFlow, EventLoop};

use crate::error::EngineError;
use crate::handler::EngineHandler;

/// Lifecycle of an [`Engine`]. Transitions only move forward, except that a
/// scene may be reloaded while in [`EngineState::SceneLoaded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Created,
    Initialized,
    SceneLoaded,
    Running,
    Stopped,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::Initialized => "initialized",
            Self::SceneLoaded => "scene-loaded",
            Self::Running => "running",
            Self::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Window parameters used when the run loop opens the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    /// Width in logical pixels.
    pub width: u32,
    /// Height in logical pixels.
    pub height: u32,
    pub title: String,
    /// Borderless fullscreen on the current monitor.
    pub fullscreen: bool,
    /// FIFO presentation.
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            title: "Starlet Project".to_string(),
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Owns the window context, the active scene, and the run loop.
///
/// ```no_run
/// use starlet_engine::Engine;
///
/// let mut engine = Engine::new();
/// engine.set_asset_paths("assets");
/// engine.initialize(1920, 1080, "Starlet Project")?;
/// engine.load_scene("EmptyScene")?;
/// engine.run()?;
/// # Ok::<(), starlet_engine::EngineError>(())
/// ```
pub struct Engine {
    state: EngineState,
    assets: Option<AssetPaths>,
    window: WindowSettings,
    show_fps: bool,
    event_loop: Option<EventLoop<()>>,
    scenes: SceneManager,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            state: EngineState::Created,
            assets: None,
            window: WindowSettings::default(),
            show_fps: false,
            event_loop: None,
            scenes: SceneManager::new(),
        }
    }

    /// An engine taking fullscreen, vsync, and FPS display from `config`.
    /// Size and title are still given to [`initialize`](Self::initialize).
    pub fn with_config(config: &Config) -> Self {
        let mut engine = Self::new();
        engine.window.fullscreen = config.window.fullscreen;
        engine.window.vsync = config.window.vsync;
        engine.show_fps = config.debug.show_fps;
        engine
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn asset_paths(&self) -> Option<&AssetPaths> {
        self.assets.as_ref()
    }

    pub fn window_settings(&self) -> &WindowSettings {
        &self.window
    }

    pub fn active_scene(&self) -> Option<&Scene> {
        self.scenes.active()
    }

    /// Sets the asset root used to resolve scenes and other content.
    ///
    /// The root is fixed once the engine is initialized; later calls are
    /// ignored with a warning.
    pub fn set_asset_paths(&mut self, root: impl Into<PathBuf>) {
        let root = root.into();
        if self.state != EngineState::Created {
            warn!(
                "Ignoring asset root {} set while engine is {}",
                root.display(),
                self.state
            );
            return;
        }
        info!("Asset root: {}", root.display());
        self.assets = Some(AssetPaths::new(root));
    }

    /// Validates the window request and creates the platform event loop.
    ///
    /// # Errors
    ///
    /// Fails if called twice, if no asset root was set or it does not exist,
    /// for zero dimensions or a blank title, or if the event loop cannot be
    /// created.
    #[instrument(skip(self))]
    pub fn initialize(&mut self, width: u32, height: u32, title: &str) -> Result<(), EngineError> {
        self.check_window_request(width, height, title)?;

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        self.window.width = width;
        self.window.height = height;
        self.window.title = title.to_owned();
        self.event_loop = Some(event_loop);
        self.state = EngineState::Initialized;
        info!("Engine initialized ({width}x{height})");
        Ok(())
    }

    fn check_window_request(&self, width: u32, height: u32, title: &str) -> Result<(), EngineError> {
        if self.state != EngineState::Created {
            return Err(EngineError::AlreadyInitialized);
        }
        let assets = self.assets.as_ref().ok_or(EngineError::AssetPathsNotSet)?;
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        if title.trim().is_empty() {
            return Err(EngineError::EmptyTitle);
        }
        assets.validate()?;
        Ok(())
    }

    /// Loads `name` from the asset root and makes it the active scene.
    ///
    /// May be called again before [`run`](Self::run) to replace the scene.
    #[instrument(skip(self))]
    pub fn load_scene(&mut self, name: &str) -> Result<(), EngineError> {
        match self.state {
            EngineState::Created => return Err(EngineError::NotInitialized),
            EngineState::Initialized | EngineState::SceneLoaded => {}
            state @ (EngineState::Running | EngineState::Stopped) => {
                return Err(EngineError::InvalidState {
                    operation: "load a scene",
                    state,
                });
            }
        }
        let assets = self.assets.as_ref().ok_or(EngineError::AssetPathsNotSet)?;

        self.scenes.load(assets, name)?;
        self.state = EngineState::SceneLoaded;
        Ok(())
    }

    /// Opens the window and runs the frame loop until the window closes.
    ///
    /// The event loop is consumed, so this runs at most once per engine.
    ///
    /// # Errors
    ///
    /// Fails if no scene is loaded, or if the window, GPU context, or surface
    /// fails while running.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), EngineError> {
        match self.state {
            EngineState::SceneLoaded => {}
            EngineState::Created => return Err(EngineError::NotInitialized),
            EngineState::Initialized => return Err(EngineError::NoActiveScene),
            state => {
                return Err(EngineError::InvalidState {
                    operation: "run",
                    state,
                });
            }
        }
        let event_loop = self.event_loop.take().ok_or(EngineError::NotInitialized)?;

        self.state = EngineState::Running;
        info!("Entering run loop");

        let mut handler = EngineHandler::new(&self.window, self.show_fps, &mut self.scenes);
        let loop_result = event_loop.run_app(&mut handler);
        let handler_result = handler.finish();

        self.state = EngineState::Stopped;
        loop_result?;
        handler_result?;
        info!("Run loop exited");
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
