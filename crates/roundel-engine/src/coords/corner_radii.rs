use super::Vec2;

/// Per-corner elliptical radii for a rounded rectangle (logical pixels).
///
/// Each corner carries a horizontal (`x`) and a vertical (`y`) radius, which
/// is what a CSS `border-radius: a b c d / e f g h` value describes.
/// Corners follow CSS order: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: Vec2, top_right: Vec2, bottom_right: Vec2, bottom_left: Vec2) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform circular radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        let v = Vec2::new(r, r);
        Self { top_left: v, top_right: v, bottom_right: v, bottom_left: v }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Scales all radii down uniformly so that adjacent radii never overlap
    /// along any edge of a box of `size`.
    ///
    /// This is the CSS "overlapping curves" rule: with
    /// `f = min(edge_len / sum_of_adjacent_radii)`, every radius is multiplied
    /// by `f` when `f < 1`. Negative radii are treated as zero.
    pub fn fit_within(self, size: Vec2) -> Self {
        let pos = |v: Vec2| Vec2::new(v.x.max(0.0), v.y.max(0.0));
        let (tl, tr, br, bl) = (
            pos(self.top_left),
            pos(self.top_right),
            pos(self.bottom_right),
            pos(self.bottom_left),
        );

        let ratio = |edge: f32, sum: f32| if sum > 0.0 { edge / sum } else { f32::INFINITY };
        let f = ratio(size.x, tl.x + tr.x)
            .min(ratio(size.x, bl.x + br.x))
            .min(ratio(size.y, tl.y + bl.y))
            .min(ratio(size.y, tr.y + br.y));

        if f < 1.0 {
            Self::new(tl * f, tr * f, br * f, bl * f)
        } else {
            Self::new(tl, tr, br, bl)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_within_keeps_radii_that_fit() {
        let radii = CornerRadii::new(
            Vec2::new(30.0, 30.0),
            Vec2::new(70.0, 30.0),
            Vec2::new(70.0, 70.0),
            Vec2::new(30.0, 70.0),
        );
        assert_eq!(radii.fit_within(Vec2::new(100.0, 100.0)), radii);
    }

    #[test]
    fn fit_within_scales_overlapping_edge() {
        // Top edge: 80 + 80 = 160 on a 100 wide box → f = 0.625.
        let radii = CornerRadii::new(
            Vec2::new(80.0, 10.0),
            Vec2::new(80.0, 10.0),
            Vec2::zero(),
            Vec2::zero(),
        );
        let fitted = radii.fit_within(Vec2::new(100.0, 100.0));
        assert_eq!(fitted.top_left, Vec2::new(50.0, 6.25));
        assert_eq!(fitted.top_right, Vec2::new(50.0, 6.25));
    }

    #[test]
    fn fit_within_clamps_negative_to_zero() {
        let radii = CornerRadii::new(Vec2::new(-5.0, 4.0), Vec2::zero(), Vec2::zero(), Vec2::zero());
        assert_eq!(radii.fit_within(Vec2::new(10.0, 10.0)).top_left, Vec2::new(0.0, 4.0));
    }
}
