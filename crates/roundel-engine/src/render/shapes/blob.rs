use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;
use crate::scene::BlobCmd;

use super::common::{InstancedPipeline, ShapeSpec};

/// Renderer for `DrawCmd::Blob`: rectangles with elliptical per-corner radii.
///
/// Coverage comes from a per-corner elliptical SDF, so any combination of
/// the eight CSS radii renders anti-aliased. The optional border is an inner
/// ring of `border.width` logical pixels.
pub struct BlobRenderer {
    pipeline: InstancedPipeline,
}

impl Default for BlobRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobRenderer {
    pub fn new() -> Self {
        Self {
            pipeline: InstancedPipeline::new(ShapeSpec {
                label: "blob",
                shader_src: include_str!("shaders/blob.wgsl"),
                instance_stride: std::mem::size_of::<BlobInstance>() as u64,
                instance_attrs: &BLOB_ATTRS,
            }),
        }
    }

    /// Converts a draw command into GPU instance data.
    ///
    /// Empty or non-finite rectangles yield `None`.
    pub fn instance(cmd: &BlobCmd) -> Option<BlobInstance> {
        let r = cmd.rect.normalized();
        if r.is_empty() || !r.is_finite() || !cmd.fill.is_finite() {
            return None;
        }

        let radii = cmd.radii.fit_within(r.size);
        let (border_color, border_width) = match cmd.border {
            Some(b) if b.width > 0.0 && b.color.is_finite() => (b.color.to_array(), b.width),
            _ => ([0.0; 4], 0.0),
        };

        Some(BlobInstance {
            origin: [r.origin.x, r.origin.y],
            size: [r.size.x, r.size.y],
            radii_top: [
                radii.top_left.x,
                radii.top_left.y,
                radii.top_right.x,
                radii.top_right.y,
            ],
            radii_bottom: [
                radii.bottom_right.x,
                radii.bottom_right.y,
                radii.bottom_left.x,
                radii.bottom_left.y,
            ],
            fill: cmd.fill.to_array(),
            border_color,
            border_width_pad: [border_width, 0.0],
        })
    }

    pub(crate) fn prepare(&mut self, ctx: &RenderCtx<'_>, instances: &[BlobInstance]) -> bool {
        self.pipeline.prepare(ctx, instances)
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, range: Range<u32>) {
        self.pipeline.draw(rpass, range);
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct BlobInstance {
    origin: [f32; 2],
    size: [f32; 2],
    radii_top: [f32; 4],    // tl.x, tl.y, tr.x, tr.y
    radii_bottom: [f32; 4], // br.x, br.y, bl.x, bl.y
    fill: [f32; 4],
    border_color: [f32; 4],
    border_width_pad: [f32; 2],
}

const BLOB_ATTRS: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
    1 => Float32x2, // origin
    2 => Float32x2, // size
    3 => Float32x4, // radii_top
    4 => Float32x4, // radii_bottom
    5 => Float32x4, // fill
    6 => Float32x4, // border_color
    7 => Float32x2  // border_width_pad
];
