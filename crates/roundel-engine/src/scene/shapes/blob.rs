use crate::coords::{CornerRadii, Rect};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rectangle with elliptical per-corner radii.
///
/// `radii` are in logical pixels and are expected to already satisfy the
/// overlap rule (see [`CornerRadii::fit_within`]); the renderer applies the
/// same fit before upload.
#[derive(Debug, Clone, PartialEq)]
pub struct BlobCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub fill: Color,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a rectangle with elliptical corners.
    #[inline]
    pub fn push_blob(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radii: CornerRadii,
        fill: Color,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::Blob(BlobCmd { rect, radii, fill, border }));
    }

    /// Records a solid rectangle with a uniform circular corner radius.
    #[inline]
    pub fn push_rounded_rect(&mut self, z: ZIndex, rect: Rect, radius: f32, fill: Color) {
        self.push_blob(z, rect, CornerRadii::all(radius), fill, None);
    }
}
