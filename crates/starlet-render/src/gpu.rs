//! GPU device initialization and surface management.
//!
//! [`RenderContext`] owns all wgpu state for the engine window.

use std::sync::Arc;
use winit::window::Window;

/// Error type for render context initialization failures.
#[derive(Debug, thiserror::Error)]
pub enum RenderContextError {
    /// No compatible GPU adapter found.
    #[error("no compatible GPU adapter found")]
    NoAdapter,

    /// Failed to request GPU device.
    #[error("failed to request GPU device: {0}")]
    DeviceRequest(#[from] wgpu::RequestDeviceError),

    /// Failed to create surface.
    #[error("failed to create surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),

    /// The adapter cannot present to the window surface.
    #[error("surface reports no supported formats for the selected adapter")]
    UnsupportedSurface,
}

/// Error type for surface acquisition failures.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// Surface was lost and could not be recovered.
    #[error("surface lost")]
    Lost,

    /// GPU ran out of memory.
    #[error("out of memory")]
    OutOfMemory,

    /// Operation timed out (recoverable, skip the frame).
    #[error("timeout")]
    Timeout,
}

/// Owns all GPU state: instance, adapter, device, queue, and surface.
pub struct RenderContext {
    pub instance: wgpu::Instance,
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub surface_format: wgpu::TextureFormat,
}

impl RenderContext {
    /// Initialize the GPU for `window`. `vsync` selects FIFO presentation.
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // Read the size before the window handle moves into the surface.
        let size = window.inner_size();
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| RenderContextError::NoAdapter)?;

        let info = adapter.get_info();
        log::info!(
            "Selected GPU: {} ({:?}, {:?})",
            info.name,
            info.backend,
            info.device_type
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("starlet-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = select_preferred_srgb_format(&surface_caps.formats)
            .ok_or(RenderContextError::UnsupportedSurface)?;
        let present_mode = select_present_mode(vsync, &surface_caps.present_modes);
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);
        log::info!(
            "Surface configured: {}x{} {:?} {:?}",
            surface_config.width,
            surface_config.height,
            surface_format,
            present_mode
        );

        Ok(Self {
            instance,
            adapter,
            device,
            queue,
            surface,
            surface_config,
            surface_format,
        })
    }

    /// Reconfigure the surface after a window resize.
    /// Clamps dimensions to max(1, val) to prevent zero-size surfaces.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface_config.width = width.max(1);
        self.surface_config.height = height.max(1);
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Get the current surface texture, reconfiguring once if the surface was
    /// lost or outdated.
    pub fn get_current_texture(&self) -> Result<wgpu::SurfaceTexture, SurfaceError> {
        match self.surface.get_current_texture() {
            Ok(texture) => Ok(texture),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.surface_config);
                self.surface
                    .get_current_texture()
                    .map_err(|_| SurfaceError::Lost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(SurfaceError::OutOfMemory),
            Err(wgpu::SurfaceError::Timeout) => Err(SurfaceError::Timeout),
            Err(wgpu::SurfaceError::Other) => {
                log::error!("Unknown surface error occurred");
                Err(SurfaceError::Lost)
            }
        }
    }
}

/// Initialize the GPU synchronously using `pollster`.
pub fn init_render_context_blocking(
    window: Arc<Window>,
    vsync: bool,
) -> Result<RenderContext, RenderContextError> {
    pollster::block_on(RenderContext::new(window, vsync))
}

/// Select the preferred surface format: Bgra8UnormSrgb, then Rgba8UnormSrgb,
/// then any sRGB format, then whatever comes first.
fn select_preferred_srgb_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    [
        wgpu::TextureFormat::Bgra8UnormSrgb,
        wgpu::TextureFormat::Rgba8UnormSrgb,
    ]
    .into_iter()
    .find(|preferred| formats.contains(preferred))
    .or_else(|| formats.iter().copied().find(|f| f.is_srgb()))
    .or_else(|| formats.first().copied())
}

/// FIFO when vsync is requested (always supported). Otherwise the lowest
/// latency mode available: Mailbox, then Immediate, then FIFO.
fn select_present_mode(vsync: bool, modes: &[wgpu::PresentMode]) -> wgpu::PresentMode {
    if vsync {
        return wgpu::PresentMode::Fifo;
    }
    [wgpu::PresentMode::Mailbox, wgpu::PresentMode::Immediate]
        .into_iter()
        .find(|mode| modes.contains(mode))
        .unwrap_or(wgpu::PresentMode::Fifo)
}
