use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;
use crate::scene::CircleCmd;

use super::common::{InstancedPipeline, ShapeSpec};

/// Renderer for `DrawCmd::Circle` (solid fill plus optional inner border).
pub struct CircleRenderer {
    pipeline: InstancedPipeline,
}

impl Default for CircleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CircleRenderer {
    pub fn new() -> Self {
        Self {
            pipeline: InstancedPipeline::new(ShapeSpec {
                label: "circle",
                shader_src: include_str!("shaders/circle.wgsl"),
                instance_stride: std::mem::size_of::<CircleInstance>() as u64,
                instance_attrs: &CIRCLE_ATTRS,
            }),
        }
    }

    pub fn instance(cmd: &CircleCmd) -> Option<CircleInstance> {
        if !(cmd.radius > 0.0) || !cmd.center.is_finite() || !cmd.fill.is_finite() {
            return None;
        }
        let (border_color, border_width) = match cmd.border {
            Some(b) if b.width > 0.0 => (b.color.to_array(), b.width.min(cmd.radius)),
            _ => ([0.0; 4], 0.0),
        };
        Some(CircleInstance {
            center: [cmd.center.x, cmd.center.y],
            radius_bw: [cmd.radius, border_width],
            fill: cmd.fill.to_array(),
            border_color,
        })
    }

    pub(crate) fn prepare(&mut self, ctx: &RenderCtx<'_>, instances: &[CircleInstance]) -> bool {
        self.pipeline.prepare(ctx, instances)
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, range: Range<u32>) {
        self.pipeline.draw(rpass, range);
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    center: [f32; 2],
    radius_bw: [f32; 2], // radius, border width
    fill: [f32; 4],
    border_color: [f32; 4],
}

const CIRCLE_ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    1 => Float32x2, // center
    2 => Float32x2, // radius_bw
    3 => Float32x4, // fill
    4 => Float32x4  // border_color
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::Border;

    #[test]
    fn zero_radius_is_skipped() {
        let cmd = CircleCmd {
            center: Vec2::zero(),
            radius: 0.0,
            fill: Color::transparent(),
            border: None,
        };
        assert!(CircleRenderer::instance(&cmd).is_none());
    }

    #[test]
    fn border_width_is_capped_at_radius() {
        let cmd = CircleCmd {
            center: Vec2::new(5.0, 5.0),
            radius: 4.0,
            fill: Color::transparent(),
            border: Some(Border::new(10.0, Color::from_straight(1.0, 1.0, 1.0, 1.0))),
        };
        let inst = CircleRenderer::instance(&cmd).unwrap();
        assert_eq!(inst.radius_bw, [4.0, 4.0]);
    }
}
