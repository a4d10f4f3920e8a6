use std::fmt;

use roundel_engine::coords::{CornerRadii, Vec2};

/// One of the four radius slots on an axis.
///
/// Slots follow the CSS value order, so on either axis `Top` is the
/// top-left corner half, `Right` top-right, `Bottom` bottom-right and `Left`
/// bottom-left.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// Four integer percentages along one axis, each in `[0, 100]`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct AxisRadii {
    pub top: u8,
    pub right: u8,
    pub bottom: u8,
    pub left: u8,
}

impl AxisRadii {
    /// Builds a record, clamping every value to 100.
    pub fn new(top: u8, right: u8, bottom: u8, left: u8) -> Self {
        Self {
            top: top.min(100),
            right: right.min(100),
            bottom: bottom.min(100),
            left: left.min(100),
        }
    }

    #[inline]
    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Writes `value` (clamped to 100) into `side`.
    #[inline]
    pub fn set(&mut self, side: Side, value: u8) {
        let value = value.min(100);
        match side {
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
        }
    }
}

/// All eight corner halves of a `border-radius`.
///
/// `Display` renders the canonical CSS value,
/// `"{xT}% {xR}% {xB}% {xL}% / {yT}% {yR}% {yB}% {yL}%"`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BorderRadius {
    pub horizontal: AxisRadii,
    pub vertical: AxisRadii,
}

impl BorderRadius {
    pub const fn new(horizontal: AxisRadii, vertical: AxisRadii) -> Self {
        Self { horizontal, vertical }
    }

    /// Resolves the percentages against a box of `size` into pixel radii.
    ///
    /// Horizontal percentages scale with the width and vertical ones with
    /// the height; the result is fitted with the CSS overlap rule.
    pub fn corner_radii(&self, size: Vec2) -> CornerRadii {
        let px = |h: u8, v: u8| Vec2::new(h as f32 * size.x / 100.0, v as f32 * size.y / 100.0);
        let (x, y) = (&self.horizontal, &self.vertical);
        CornerRadii::new(
            px(x.top, y.top),
            px(x.right, y.right),
            px(x.bottom, y.bottom),
            px(x.left, y.left),
        )
        .fit_within(size)
    }
}

impl Default for BorderRadius {
    /// The editor's starting shape: `30% 70% 70% 30% / 30% 30% 70% 70%`.
    fn default() -> Self {
        Self {
            horizontal: AxisRadii { top: 30, right: 70, bottom: 70, left: 30 },
            vertical: AxisRadii { top: 30, right: 30, bottom: 70, left: 70 },
        }
    }
}

impl fmt::Display for BorderRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = (&self.horizontal, &self.vertical);
        write!(
            f,
            "{}% {}% {}% {}% / {}% {}% {}% {}%",
            x.top, x.right, x.bottom, x.left, y.top, y.right, y.bottom, y.left
        )
    }
}
