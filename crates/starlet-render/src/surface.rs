//! Surface size tracking that normalizes platform resize behavior.
//!
//! Wayland hands out zero-size windows before the compositor assigns a size,
//! minimized windows report 0×0 on Windows, and HiDPI displays change the
//! scale factor at runtime. [`SurfaceWrapper`] always reports a physical size
//! of at least 1×1 for surface configuration and remembers whether rendering
//! should be skipped.

/// Minimum surface dimension (prevents zero-size panics).
pub const MIN_SURFACE_DIMENSION: u32 = 1;

/// Physical pixel dimensions of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

/// Emitted when the surface must be reconfigured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceResizeEvent {
    /// New physical pixel dimensions (clamped to >= 1).
    pub physical: PhysicalSize,
    /// Scale factor in effect after the change.
    pub scale_factor: f64,
}

/// Tracks the drawable size of the window surface.
#[derive(Debug, Clone)]
pub struct SurfaceWrapper {
    size: PhysicalSize,
    scale_factor: f64,
    /// The last reported size was zero in some dimension.
    minimized: bool,
    /// A non-zero size has been reported at least once.
    configured: bool,
}

impl SurfaceWrapper {
    /// Creates a wrapper from the window's initial physical size and scale factor.
    pub fn new(physical_width: u32, physical_height: u32, scale_factor: f64) -> Self {
        let minimized = physical_width == 0 || physical_height == 0;
        Self {
            size: clamp(physical_width, physical_height),
            scale_factor,
            minimized,
            configured: !minimized,
        }
    }

    /// Handles a window resize. Returns an event only when the clamped physical
    /// size actually changed.
    pub fn handle_resize(
        &mut self,
        physical_width: u32,
        physical_height: u32,
    ) -> Option<SurfaceResizeEvent> {
        self.minimized = physical_width == 0 || physical_height == 0;
        if !self.minimized {
            self.configured = true;
        }

        let size = clamp(physical_width, physical_height);
        if size == self.size {
            return None;
        }
        self.size = size;

        Some(SurfaceResizeEvent {
            physical: size,
            scale_factor: self.scale_factor,
        })
    }

    /// Handles a DPI change. The physical size changes with the scale factor,
    /// so this reports like a resize.
    pub fn handle_scale_factor_changed(
        &mut self,
        scale_factor: f64,
        physical_width: u32,
        physical_height: u32,
    ) -> Option<SurfaceResizeEvent> {
        self.scale_factor = scale_factor;
        self.handle_resize(physical_width, physical_height)
    }

    pub fn physical_size(&self) -> PhysicalSize {
        self.size
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Whether frames should be rendered: a real size has been seen and the
    /// window is not currently minimized.
    pub fn should_render(&self) -> bool {
        self.configured && !self.minimized
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }
}

fn clamp(width: u32, height: u32) -> PhysicalSize {
    PhysicalSize {
        width: width.max(MIN_SURFACE_DIMENSION),
        height: height.max(MIN_SURFACE_DIMENSION),
    }
}
