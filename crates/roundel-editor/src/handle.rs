use std::fmt;

use roundel_engine::coords::Axis;

use crate::radii::{BorderRadius, Side};

/// One of the four draggable handles.
///
/// Each handle sits on one edge of the container, slides along that edge's
/// axis, and owns a fixed pair of slots on that axis. With `p` the pointer
/// position in percent measured from the left (horizontal) or top
/// (vertical) edge:
///
/// | handle   | id    | axis       | `p` goes to | `100 − p` goes to |
/// |----------|-------|------------|-------------|-------------------|
/// | `Top`    | `xTR` | horizontal | top         | right             |
/// | `Bottom` | `xLB` | horizontal | left        | bottom            |
/// | `Right`  | `yBR` | vertical   | right       | bottom            |
/// | `Left`   | `yLT` | vertical   | top         | left              |
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HandleId {
    Top,
    Right,
    Bottom,
    Left,
}

impl HandleId {
    pub const ALL: [HandleId; 4] = [HandleId::Top, HandleId::Right, HandleId::Bottom, HandleId::Left];

    /// Parses a textual handle id (`xTR`, `xLB`, `yBR`, `yLT`).
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "xTR" => Some(HandleId::Top),
            "xLB" => Some(HandleId::Bottom),
            "yBR" => Some(HandleId::Right),
            "yLT" => Some(HandleId::Left),
            _ => None,
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            HandleId::Top => "xTR",
            HandleId::Bottom => "xLB",
            HandleId::Right => "yBR",
            HandleId::Left => "yLT",
        }
    }

    /// Axis the handle slides along and edits.
    pub const fn axis(self) -> Axis {
        match self {
            HandleId::Top | HandleId::Bottom => Axis::Horizontal,
            HandleId::Right | HandleId::Left => Axis::Vertical,
        }
    }

    /// Slot that receives the near-side percentage.
    pub const fn near_side(self) -> Side {
        match self {
            HandleId::Top => Side::Top,
            HandleId::Bottom => Side::Left,
            HandleId::Right => Side::Right,
            HandleId::Left => Side::Top,
        }
    }

    /// Slot that receives the complementary `100 − p`.
    pub const fn far_side(self) -> Side {
        match self {
            HandleId::Top => Side::Right,
            HandleId::Bottom => Side::Bottom,
            HandleId::Right => Side::Bottom,
            HandleId::Left => Side::Left,
        }
    }

    /// Handle position along its edge implied by `radius`, as a fraction of
    /// the container extent.
    pub fn offset_in(self, radius: &BorderRadius) -> f32 {
        let axis = match self.axis() {
            Axis::Horizontal => &radius.horizontal,
            Axis::Vertical => &radius.vertical,
        };
        axis.get(self.near_side()) as f32 / 100.0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_id() {
        for h in HandleId::ALL {
            assert_eq!(HandleId::parse(h.id()), Some(h));
        }
    }

    #[test]
    fn malformed_ids_do_not_parse() {
        for bad in ["", "x", "xRT", "XTR", "yTL", "xTR ", "zTR", "shape"] {
            assert_eq!(HandleId::parse(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn id_prefix_encodes_axis() {
        for h in HandleId::ALL {
            let expected = if h.id().starts_with('x') { Axis::Horizontal } else { Axis::Vertical };
            assert_eq!(h.axis(), expected);
        }
    }

    #[test]
    fn near_and_far_sides_differ() {
        for h in HandleId::ALL {
            assert_ne!(h.near_side(), h.far_side());
        }
    }

    #[test]
    fn initial_offsets_follow_initial_radii() {
        let r = BorderRadius::default();
        assert_eq!(HandleId::Top.offset_in(&r), 0.3);
        assert_eq!(HandleId::Bottom.offset_in(&r), 0.3);
        assert_eq!(HandleId::Right.offset_in(&r), 0.3);
        assert_eq!(HandleId::Left.offset_in(&r), 0.3);
    }
}
