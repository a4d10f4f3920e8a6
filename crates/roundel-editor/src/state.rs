use roundel_engine::coords::Axis;

use crate::handle::HandleId;
use crate::radii::{AxisRadii, BorderRadius};

/// The eight corner percentages plus the visual handle offsets.
///
/// Every drag update commits immediately; there is no pending state and no
/// history. `revision` increases whenever something visible changed, which
/// is what the presentation layer keys its redraws on.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusState {
    radius: BorderRadius,
    /// Handle positions along their edges, in `[0, 1]`, indexed by `slot()`.
    offsets: [f32; 4],
    revision: u64,
}

fn slot(handle: HandleId) -> usize {
    match handle {
        HandleId::Top => 0,
        HandleId::Right => 1,
        HandleId::Bottom => 2,
        HandleId::Left => 3,
    }
}

impl RadiusState {
    pub fn new(initial: BorderRadius) -> Self {
        let offsets = HandleId::ALL.map(|h| h.offset_in(&initial));
        Self { radius: initial, offsets, revision: 0 }
    }

    #[inline]
    pub fn radius(&self) -> &BorderRadius {
        &self.radius
    }

    #[inline]
    pub fn axis(&self, axis: Axis) -> &AxisRadii {
        match axis {
            Axis::Horizontal => &self.radius.horizontal,
            Axis::Vertical => &self.radius.vertical,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisRadii {
        match axis {
            Axis::Horizontal => &mut self.radius.horizontal,
            Axis::Vertical => &mut self.radius.vertical,
        }
    }

    /// Canonical CSS value of the current shape.
    pub fn value_string(&self) -> String {
        self.radius.to_string()
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Handle position along its edge as a fraction of the container extent.
    #[inline]
    pub fn offset(&self, handle: HandleId) -> f32 {
        self.offsets[slot(handle)]
    }

    /// Moves the handle's visual position. Clamped to `[0, 1]`; non-finite
    /// values are ignored.
    pub fn set_offset(&mut self, handle: HandleId, fraction: f32) {
        if !fraction.is_finite() {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        let current = &mut self.offsets[slot(handle)];
        if *current != fraction {
            *current = fraction;
            self.revision += 1;
        }
    }

    /// Applies one drag step of `handle` at `near_percent`.
    ///
    /// The handle's near slot receives `p` and its far slot `100 − p` on the
    /// handle's axis, where `p` is `near_percent` clamped to 100. No other
    /// slot is touched. Returns the updated axis record.
    pub fn apply_drag(&mut self, handle: HandleId, near_percent: u8) -> AxisRadii {
        let p = near_percent.min(100);
        let axis = self.axis_mut(handle.axis());

        let before = *axis;
        axis.set(handle.near_side(), p);
        axis.set(handle.far_side(), 100 - p);
        let after = *axis;

        if after != before {
            self.revision += 1;
        }
        after
    }
}

impl Default for RadiusState {
    fn default() -> Self {
        Self::new(BorderRadius::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radii::Side;

    // ── apply_drag ────────────────────────────────────────────────────────

    #[test]
    fn drag_writes_complementary_pair_summing_to_100() {
        for h in HandleId::ALL {
            for p in [0u8, 1, 33, 50, 99, 100, 200] {
                let mut s = RadiusState::default();
                let a = s.apply_drag(h, p);
                assert_eq!(a.get(h.near_side()) as u32 + a.get(h.far_side()) as u32, 100);
            }
        }
    }

    #[test]
    fn drag_touches_only_the_handles_pair() {
        for h in HandleId::ALL {
            let mut s = RadiusState::default();
            let before = *s.radius();
            s.apply_drag(h, 5);

            let other = h.axis().cross();
            assert_eq!(s.axis(other), match other {
                Axis::Horizontal => &before.horizontal,
                Axis::Vertical => &before.vertical,
            });

            let prev = match h.axis() {
                Axis::Horizontal => before.horizontal,
                Axis::Vertical => before.vertical,
            };
            for side in Side::ALL {
                if side != h.near_side() && side != h.far_side() {
                    assert_eq!(s.axis(h.axis()).get(side), prev.get(side), "{h} {side:?}");
                }
            }
        }
    }

    #[test]
    fn midpoint_on_top_handle_sets_top_and_right_to_50() {
        let mut s = RadiusState::default();
        let a = s.apply_drag(HandleId::Top, 50);
        assert_eq!(a.top, 50);
        assert_eq!(a.right, 50);
        assert_eq!(s.value_string(), "50% 50% 70% 30% / 30% 30% 70% 70%");
    }

    #[test]
    fn each_handle_maps_to_its_slots() {
        let mut s = RadiusState::default();
        s.apply_drag(HandleId::Top, 10);
        s.apply_drag(HandleId::Bottom, 20);
        s.apply_drag(HandleId::Right, 40);
        s.apply_drag(HandleId::Left, 60);
        assert_eq!(s.value_string(), "10% 90% 80% 20% / 60% 40% 60% 40%");
    }

    #[test]
    fn repeated_drag_is_idempotent() {
        let mut s = RadiusState::default();
        let first = s.apply_drag(HandleId::Right, 42);
        let rev = s.revision();
        let second = s.apply_drag(HandleId::Right, 42);
        assert_eq!(first, second);
        assert_eq!(s.revision(), rev);
    }

    #[test]
    fn revision_bumps_on_change() {
        let mut s = RadiusState::default();
        assert_eq!(s.revision(), 0);
        s.apply_drag(HandleId::Left, 90);
        assert_eq!(s.revision(), 1);
    }

    // ── offsets ───────────────────────────────────────────────────────────

    #[test]
    fn offsets_start_at_initial_radii() {
        let s = RadiusState::default();
        for h in HandleId::ALL {
            assert_eq!(s.offset(h), 0.3);
        }
    }

    #[test]
    fn set_offset_clamps_and_ignores_nan() {
        let mut s = RadiusState::default();
        s.set_offset(HandleId::Top, 1.5);
        assert_eq!(s.offset(HandleId::Top), 1.0);
        s.set_offset(HandleId::Top, f32::NAN);
        assert_eq!(s.offset(HandleId::Top), 1.0);
    }
}
