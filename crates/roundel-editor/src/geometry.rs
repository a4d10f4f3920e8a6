//! Pointer coordinate → percentage mapping.
//!
//! Everything here is pure. The container is described by a
//! [`BoundingMeasurement`] that callers obtain fresh for every pointer move
//! through a [`ContainerMeasure`] capability.

use roundel_engine::coords::{Axis, Rect, Vec2};

/// Clamps `value` into `[min, max]`.
#[inline]
pub fn clamp_percent(value: i32, min: i32, max: i32) -> i32 {
    debug_assert!(min <= max);
    value.max(min).min(max)
}

/// Maps `pointer` to an integer percentage of the span
/// `[container_start, container_start + container_extent]`.
///
/// The raw ratio is rounded to the nearest integer and clamped to `[0, 100]`,
/// so positions before the start edge yield 0 and positions past the far
/// edge yield 100.
///
/// `container_extent` must be at least one pixel; callers skip the event for
/// zero-sized containers instead of calling this.
pub fn coordinate_to_percent(pointer: f32, container_start: f32, container_extent: f32) -> u8 {
    debug_assert!(
        container_extent >= 1.0,
        "coordinate_to_percent: extent {container_extent} < 1"
    );
    let raw = ((pointer - container_start) / container_extent * 100.0).round();
    // `as` saturates; NaN maps to 0.
    clamp_percent(raw as i32, 0, 100) as u8
}

/// Same mapping as [`coordinate_to_percent`] without rounding, as a fraction
/// in `[0, 1]`.
pub fn coordinate_to_fraction(pointer: f32, container_start: f32, container_extent: f32) -> f32 {
    debug_assert!(container_extent >= 1.0);
    let t = (pointer - container_start) / container_extent;
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Live on-screen box of the radius container, in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoundingMeasurement {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingMeasurement {
    #[inline]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    #[inline]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.origin.x, rect.origin.y, rect.size.x, rect.size.y)
    }

    #[inline]
    pub fn rect(self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    /// Start edge along `axis`: left for horizontal, top for vertical.
    #[inline]
    pub fn start(self, axis: Axis) -> f32 {
        self.rect().start(axis)
    }

    #[inline]
    pub fn extent(self, axis: Axis) -> f32 {
        self.rect().extent(axis)
    }

    /// True when a percentage can be computed along `axis`: every field is
    /// finite and the extent covers at least one pixel.
    pub fn is_measurable(self, axis: Axis) -> bool {
        let finite = self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        finite && self.extent(axis) >= 1.0
    }

    /// Near-side percentage of `pos` along `axis`.
    ///
    /// `None` when the container is not measurable along that axis.
    pub fn percent_at(self, pos: Vec2, axis: Axis) -> Option<u8> {
        if !self.is_measurable(axis) || !pos.along(axis).is_finite() {
            return None;
        }
        Some(coordinate_to_percent(pos.along(axis), self.start(axis), self.extent(axis)))
    }

    /// Unrounded counterpart of [`percent_at`](Self::percent_at).
    pub fn fraction_at(self, pos: Vec2, axis: Axis) -> Option<f32> {
        if !self.is_measurable(axis) || !pos.along(axis).is_finite() {
            return None;
        }
        Some(coordinate_to_fraction(pos.along(axis), self.start(axis), self.extent(axis)))
    }
}

/// Capability that reports the container's current bounding box.
///
/// Returns `None` while the container is not laid out (e.g. before the first
/// frame).
pub trait ContainerMeasure {
    fn measure(&self) -> Option<BoundingMeasurement>;
}

impl ContainerMeasure for BoundingMeasurement {
    fn measure(&self) -> Option<BoundingMeasurement> {
        Some(*self)
    }
}

impl<F> ContainerMeasure for F
where
    F: Fn() -> Option<BoundingMeasurement>,
{
    fn measure(&self) -> Option<BoundingMeasurement> {
        self()
    }
}
