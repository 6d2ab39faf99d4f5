//! wgpu rendering for Starlet: device/surface ownership, resize handling, and
//! per-frame clear submission.

pub mod gpu;
pub mod pass;
pub mod surface;

pub use gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use pass::{ClearPass, clear_color_from_rgba, render_clear_frame};
pub use surface::{PhysicalSize, SurfaceResizeEvent, SurfaceWrapper};
