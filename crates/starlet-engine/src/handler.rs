//! winit event handling for the engine window.

use std::sync::Arc;
use std::time::Instant;

use starlet_render::{
    ClearPass, RenderContext, SurfaceError, SurfaceWrapper, clear_color_from_rgba,
    init_render_context_blocking, render_clear_frame,
};
use starlet_scene::{DEFAULT_CLEAR_COLOR, SceneManager};
use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use crate::engine::WindowSettings;
use crate::error::EngineError;
use crate::game_loop::{FpsCounter, GameLoop};

/// Builds the window attributes for `settings`.
pub(crate) fn window_attributes(settings: &WindowSettings) -> WindowAttributes {
    let attrs = WindowAttributes::default()
        .with_title(settings.title.clone())
        .with_inner_size(LogicalSize::new(
            f64::from(settings.width),
            f64::from(settings.height),
        ));
    if settings.fullscreen {
        attrs.with_fullscreen(Some(Fullscreen::Borderless(None)))
    } else {
        attrs
    }
}

/// Per-run window and GPU state. Borrows the engine's scenes for the
/// duration of the event loop.
pub(crate) struct EngineHandler<'a> {
    settings: &'a WindowSettings,
    scenes: &'a mut SceneManager,
    show_fps: bool,
    window: Option<Arc<Window>>,
    gpu: Option<RenderContext>,
    surface: SurfaceWrapper,
    game_loop: GameLoop,
    fps: FpsCounter,
    failure: Option<EngineError>,
}

impl<'a> EngineHandler<'a> {
    pub(crate) fn new(
        settings: &'a WindowSettings,
        show_fps: bool,
        scenes: &'a mut SceneManager,
    ) -> Self {
        Self {
            settings,
            scenes,
            show_fps,
            window: None,
            gpu: None,
            surface: SurfaceWrapper::new(settings.width, settings.height, 1.0),
            game_loop: GameLoop::new(),
            fps: FpsCounter::new(Instant::now()),
            failure: None,
        }
    }

    /// The error that stopped the loop, if any.
    pub(crate) fn finish(self) -> Result<(), EngineError> {
        info!(
            "Rendered {} frames, {} simulation steps ({:.1}s simulated)",
            self.game_loop.frame_count(),
            self.game_loop.update_count(),
            self.game_loop.total_sim_time()
        );
        match self.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: EngineError) {
        error!("{err}");
        self.failure = Some(err);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), EngineError> {
        let window = Arc::new(event_loop.create_window(window_attributes(self.settings))?);

        let inner_size = window.inner_size();
        let scale_factor = window.scale_factor();
        self.surface = SurfaceWrapper::new(inner_size.width, inner_size.height, scale_factor);
        info!(
            "Window created: {}x{} (scale: {:.2})",
            inner_size.width, inner_size.height, scale_factor
        );

        let gpu = init_render_context_blocking(window.clone(), self.settings.vsync)?;
        self.gpu = Some(gpu);
        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn apply_resize(&mut self, width: u32, height: u32, scale_factor: Option<f64>) {
        let event = match scale_factor {
            Some(scale) => self
                .surface
                .handle_scale_factor_changed(scale, width, height),
            None => self.surface.handle_resize(width, height),
        };
        if let Some(event) = event {
            if let Some(gpu) = &mut self.gpu {
                gpu.resize(event.physical.width, event.physical.height);
            }
            debug!(
                "Surface resized to {}x{} (scale: {:.2})",
                event.physical.width, event.physical.height, event.scale_factor
            );
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let scenes = &mut *self.scenes;
        self.game_loop.tick(|dt, _sim_time| {
            if let Some(scene) = scenes.active_mut() {
                scene.update(dt);
            }
        });

        if self.surface.should_render()
            && let Some(gpu) = &self.gpu
        {
            let color = self
                .scenes
                .active()
                .map_or(DEFAULT_CLEAR_COLOR, |scene| scene.clear_color());
            let pass = ClearPass::new(clear_color_from_rgba(color)).label("scene-clear");

            match render_clear_frame(gpu, &pass) {
                Ok(()) => {}
                Err(SurfaceError::Lost) => {
                    let size = self.surface.physical_size();
                    if let Some(gpu) = &mut self.gpu {
                        gpu.resize(size.width, size.height);
                    }
                }
                Err(SurfaceError::Timeout) => warn!("Surface timeout, skipping frame"),
                Err(err @ SurfaceError::OutOfMemory) => {
                    self.fail(event_loop, err.into());
                    return;
                }
            }
        }

        if let Some(fps) = self.fps.record(Instant::now()) {
            debug!("{fps:.1} FPS");
            if self.show_fps
                && let Some(window) = &self.window
            {
                window.set_title(&format!("{} | {fps:.0} FPS", self.settings.title));
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for EngineHandler<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.create_window(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => self.apply_resize(size.width, size.height, None),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    self.apply_resize(size.width, size.height, Some(scale_factor));
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
