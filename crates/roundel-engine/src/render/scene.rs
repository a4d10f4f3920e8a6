use std::ops::Range;

use crate::render::shapes::blob::{BlobInstance, BlobRenderer};
use crate::render::shapes::circle::{CircleInstance, CircleRenderer};
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ShapeKind {
    Blob,
    Circle,
}

/// Consecutive instances of one shape kind, in paint order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Batch {
    kind: ShapeKind,
    range: Range<u32>,
}

/// Draws a whole `DrawList` in one render pass.
///
/// Items are walked in paint order and grouped into batches of the same
/// shape kind, so z-order holds across renderers while each renderer
/// uploads its instances once per frame.
#[derive(Default)]
pub struct SceneRenderer {
    blobs: BlobRenderer,
    circles: CircleRenderer,

    blob_instances: Vec<BlobInstance>,
    circle_instances: Vec<CircleInstance>,
    batches: Vec<Batch>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.collect(draw_list);
        if self.batches.is_empty() {
            return;
        }

        let blobs_ready = self.blobs.prepare(ctx, &self.blob_instances);
        let circles_ready = self.circles.prepare(ctx, &self.circle_instances);

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("roundel scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for batch in &self.batches {
            match batch.kind {
                ShapeKind::Blob if blobs_ready => self.blobs.draw(&mut rpass, batch.range.clone()),
                ShapeKind::Circle if circles_ready => {
                    self.circles.draw(&mut rpass, batch.range.clone())
                }
                _ => {}
            }
        }
    }

    fn collect(&mut self, draw_list: &mut DrawList) {
        self.blob_instances.clear();
        self.circle_instances.clear();
        self.batches.clear();

        for item in draw_list.iter_in_paint_order() {
            let (kind, index) = match &item.cmd {
                DrawCmd::Blob(cmd) => {
                    let Some(inst) = BlobRenderer::instance(cmd) else { continue };
                    self.blob_instances.push(inst);
                    (ShapeKind::Blob, self.blob_instances.len() as u32 - 1)
                }
                DrawCmd::Circle(cmd) => {
                    let Some(inst) = CircleRenderer::instance(cmd) else { continue };
                    self.circle_instances.push(inst);
                    (ShapeKind::Circle, self.circle_instances.len() as u32 - 1)
                }
            };
            push_batch(&mut self.batches, kind, index);
        }
    }
}

fn push_batch(batches: &mut Vec<Batch>, kind: ShapeKind, index: u32) {
    match batches.last_mut() {
        Some(last) if last.kind == kind && last.range.end == index => last.range.end += 1,
        _ => batches.push(Batch { kind, range: index..index + 1 }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;
    use crate::scene::ZIndex;

    fn kinds(r: &SceneRenderer) -> Vec<(ShapeKind, Range<u32>)> {
        r.batches.iter().map(|b| (b.kind, b.range.clone())).collect()
    }

    #[test]
    fn consecutive_shapes_share_a_batch() {
        let mut list = DrawList::new();
        let red = Color::from_straight(1.0, 0.0, 0.0, 1.0);
        list.push_rounded_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 10.0, 10.0), 2.0, red);
        list.push_rounded_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 20.0, 20.0), 2.0, red);
        list.push_solid_circle(ZIndex::new(1), Vec2::new(5.0, 5.0), 3.0, red);
        list.push_rounded_rect(ZIndex::new(2), Rect::new(0.0, 0.0, 5.0, 5.0), 0.0, red);

        let mut r = SceneRenderer::new();
        r.collect(&mut list);
        assert_eq!(
            kinds(&r),
            vec![
                (ShapeKind::Blob, 0..2),
                (ShapeKind::Circle, 0..1),
                (ShapeKind::Blob, 2..3),
            ]
        );
    }

    #[test]
    fn skipped_commands_do_not_open_batches() {
        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex::new(0), Vec2::zero(), 0.0, Color::transparent());
        let mut r = SceneRenderer::new();
        r.collect(&mut list);
        assert!(r.batches.is_empty());
    }
}
