//! Clear-only frame rendering.

use crate::gpu::{RenderContext, SurfaceError};

/// Describes a render pass that clears the color target.
#[derive(Debug, Clone, Copy)]
pub struct ClearPass {
    clear_color: wgpu::Color,
    label: Option<&'static str>,
}

impl Default for ClearPass {
    fn default() -> Self {
        Self::new(wgpu::Color::BLACK)
    }
}

impl ClearPass {
    pub fn new(clear_color: wgpu::Color) -> Self {
        Self {
            clear_color,
            label: None,
        }
    }

    /// Set debug label for the render pass.
    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn clear_color(&self) -> wgpu::Color {
        self.clear_color
    }

    /// Begins the pass on `encoder`, clearing `target`.
    pub fn begin<'encoder>(
        &self,
        encoder: &'encoder mut wgpu::CommandEncoder,
        target: &'encoder wgpu::TextureView,
    ) -> wgpu::RenderPass<'encoder> {
        let color_attachment = wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(self.clear_color),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        };

        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: self.label,
            color_attachments: &[Some(color_attachment)],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}

/// Converts an RGBA array to a `wgpu::Color`.
pub fn clear_color_from_rgba(rgba: [f64; 4]) -> wgpu::Color {
    let [r, g, b, a] = rgba;
    wgpu::Color { r, g, b, a }
}

/// Acquires the next surface texture, clears it with `pass`, submits, and presents.
pub fn render_clear_frame(ctx: &RenderContext, pass: &ClearPass) -> Result<(), SurfaceError> {
    let frame = ctx.get_current_texture()?;
    let view = frame
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("starlet-frame"),
        });
    {
        let _pass = pass.begin(&mut encoder, &view);
    }

    ctx.queue.submit([encoder.finish()]);
    frame.present();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_clear_is_black() {
        let pass = ClearPass::default();
        assert_eq!(pass.clear_color(), wgpu::Color::BLACK);
        assert!(pass.label.is_none());
    }

    #[test]
    fn test_label_is_stored() {
        let pass = ClearPass::new(wgpu::Color::RED).label("scene-clear");
        assert_eq!(pass.label, Some("scene-clear"));
        assert_eq!(pass.clear_color().r, 1.0);
    }

    #[test]
    fn test_clear_color_from_rgba() {
        let color = clear_color_from_rgba([0.02, 0.02, 0.08, 1.0]);
        assert_eq!(
            color,
            wgpu::Color {
                r: 0.02,
                g: 0.02,
                b: 0.08,
                a: 1.0
            }
        );
    }
}
