//! Drag lifecycle: press on a handle, move anywhere, release anywhere.

use roundel_engine::coords::{Axis, Vec2};

use crate::geometry::ContainerMeasure;
use crate::handle::HandleId;
use crate::radii::AxisRadii;
use crate::state::RadiusState;

/// Current drag, if any. At most one handle is ever gripped.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging(HandleId),
}

/// Result of one applied pointer move.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragUpdate {
    pub handle: HandleId,
    pub axis: Axis,
    /// Near-side percentage written to the handle's near slot.
    pub percent: u8,
    /// Axis record after the update.
    pub radii: AxisRadii,
    /// Unrounded handle position along its edge, in `[0, 1]`.
    pub offset: f32,
}

/// Owns the [`DragSession`] and turns pointer moves into state updates.
///
/// The controller never caches layout: every move asks the injected
/// [`ContainerMeasure`] for the container's current box.
#[derive(Debug, Default)]
pub struct InteractionController {
    session: DragSession,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn session(&self) -> DragSession {
        self.session
    }

    #[inline]
    pub fn active_handle(&self) -> Option<HandleId> {
        match self.session {
            DragSession::Idle => None,
            DragSession::Dragging(h) => Some(h),
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session != DragSession::Idle
    }

    /// Starts a drag on the handle named `id`.
    ///
    /// Unknown ids leave the session untouched and return `false`.
    pub fn press(&mut self, id: &str) -> bool {
        match HandleId::parse(id) {
            Some(handle) => {
                self.press_handle(handle);
                true
            }
            None => {
                log::debug!("press on unknown handle id {id:?} ignored");
                false
            }
        }
    }

    /// Starts a drag on `handle`. Pressing while another handle is gripped
    /// moves the grip to `handle`.
    pub fn press_handle(&mut self, handle: HandleId) {
        if let DragSession::Dragging(prev) = self.session {
            if prev != handle {
                log::debug!("drag retargeted {prev} -> {handle}");
            }
        } else {
            log::debug!("drag start on {handle} ({} axis)", handle.axis());
        }
        self.session = DragSession::Dragging(handle);
    }

    /// Applies a pointer move at `pos` (window logical pixels).
    ///
    /// Returns `None` when idle, or when the container cannot be measured
    /// along the active axis; in both cases nothing changes.
    pub fn pointer_moved<M>(
        &mut self,
        pos: Vec2,
        measure: &M,
        state: &mut RadiusState,
    ) -> Option<DragUpdate>
    where
        M: ContainerMeasure + ?Sized,
    {
        let DragSession::Dragging(handle) = self.session else {
            return None;
        };
        let axis = handle.axis();

        let Some(bounds) = measure.measure() else {
            log::trace!("move skipped: container not laid out");
            return None;
        };
        let (Some(percent), Some(offset)) =
            (bounds.percent_at(pos, axis), bounds.fraction_at(pos, axis))
        else {
            log::trace!("move skipped: container {bounds:?} not measurable along {axis}");
            return None;
        };

        let radii = state.apply_drag(handle, percent);
        state.set_offset(handle, offset);
        log::trace!("{handle} -> {percent}% ({})", state.value_string());

        Some(DragUpdate { handle, axis, percent, radii, offset })
    }

    /// Ends the drag. Returns the handle that was released, if any.
    pub fn release(&mut self) -> Option<HandleId> {
        let released = self.active_handle();
        if let Some(h) = released {
            log::debug!("drag end on {h}");
        }
        self.session = DragSession::Idle;
        released
    }

    /// Ends any drag because the window lost focus; the matching release
    /// would otherwise never arrive.
    pub fn focus_lost(&mut self) -> Option<HandleId> {
        if self.is_dragging() {
            log::debug!("focus lost while dragging");
        }
        self.release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingMeasurement;
    use std::cell::Cell;

    fn square(size: f32) -> BoundingMeasurement {
        BoundingMeasurement::new(0.0, 0.0, size, size)
    }

    // ── session transitions ───────────────────────────────────────────────

    #[test]
    fn press_starts_and_release_ends_drag() {
        let mut c = InteractionController::new();
        assert_eq!(c.session(), DragSession::Idle);
        assert!(c.press("yBR"));
        assert_eq!(c.session(), DragSession::Dragging(HandleId::Right));
        assert_eq!(c.release(), Some(HandleId::Right));
        assert_eq!(c.session(), DragSession::Idle);
    }

    #[test]
    fn malformed_id_is_a_no_op() {
        let mut c = InteractionController::new();
        assert!(!c.press("yXX"));
        assert_eq!(c.session(), DragSession::Idle);

        c.press_handle(HandleId::Top);
        assert!(!c.press("nope"));
        assert_eq!(c.session(), DragSession::Dragging(HandleId::Top));
    }

    #[test]
    fn pressing_another_handle_retargets() {
        let mut c = InteractionController::new();
        c.press_handle(HandleId::Top);
        c.press_handle(HandleId::Left);
        assert_eq!(c.active_handle(), Some(HandleId::Left));
    }

    #[test]
    fn release_while_idle_is_a_no_op() {
        let mut c = InteractionController::new();
        assert_eq!(c.release(), None);
        assert_eq!(c.focus_lost(), None);
        assert!(!c.is_dragging());
    }

    #[test]
    fn focus_loss_ends_drag() {
        let mut c = InteractionController::new();
        c.press_handle(HandleId::Bottom);
        assert_eq!(c.focus_lost(), Some(HandleId::Bottom));
        assert!(!c.is_dragging());
    }

    // ── pointer moves ─────────────────────────────────────────────────────

    #[test]
    fn idle_move_changes_nothing() {
        let mut c = InteractionController::new();
        let mut s = RadiusState::default();
        let before = s.clone();
        assert_eq!(c.pointer_moved(Vec2::new(10.0, 10.0), &square(200.0), &mut s), None);
        assert_eq!(s, before);
    }

    #[test]
    fn move_after_release_changes_nothing() {
        let mut c = InteractionController::new();
        let mut s = RadiusState::default();
        c.press_handle(HandleId::Top);
        c.release();
        let before = s.clone();
        assert_eq!(c.pointer_moved(Vec2::new(10.0, 10.0), &square(200.0), &mut s), None);
        assert_eq!(s, before);
    }

    #[test]
    fn horizontal_move_at_midpoint() {
        let mut c = InteractionController::new();
        let mut s = RadiusState::default();
        c.press("xTR");
        let upd = c
            .pointer_moved(Vec2::new(100.0, 999.0), &BoundingMeasurement::new(0.0, 0.0, 200.0, 50.0), &mut s)
            .unwrap();
        assert_eq!(upd.axis, Axis::Horizontal);
        assert_eq!(upd.percent, 50);
        assert_eq!(upd.radii.top, 50);
        assert_eq!(upd.radii.right, 50);
        assert_eq!(upd.offset, 0.5);
        assert_eq!(s.offset(HandleId::Top), 0.5);
    }

    #[test]
    fn vertical_move_reads_y_and_top_offset() {
        let mut c = InteractionController::new();
        let mut s = RadiusState::default();
        c.press("yLT");
        let bounds = BoundingMeasurement::new(0.0, 100.0, 50.0, 400.0);
        let upd = c.pointer_moved(Vec2::new(-999.0, 200.0), &bounds, &mut s).unwrap();
        assert_eq!(upd.percent, 25);
        assert_eq!(s.radius().vertical.top, 25);
        assert_eq!(s.radius().vertical.left, 75);
    }

    #[test]
    fn edges_clamp() {
        let mut c = InteractionController::new();
        let mut s = RadiusState::default();
        c.press_handle(HandleId::Bottom);

        let upd = c.pointer_moved(Vec2::new(0.0, 0.0), &square(200.0), &mut s).unwrap();
        assert_eq!((upd.radii.left, upd.radii.bottom), (0, 100));

        let upd = c.pointer_moved(Vec2::new(250.0, 0.0), &square(200.0), &mut s).unwrap();
        assert_eq!((upd.radii.left, upd.radii.bottom), (100, 0));
        assert_eq!(upd.offset, 1.0);
    }

    #[test]
    fn zero_sized_container_skips_the_event() {
        let mut c = InteractionController::new();
        let mut s = RadiusState::default();
        c.press_handle(HandleId::Right);
        let before = s.clone();
        let flat = BoundingMeasurement::new(0.0, 0.0, 200.0, 0.0);
        assert_eq!(c.pointer_moved(Vec2::new(10.0, 10.0), &flat, &mut s), None);
        assert_eq!(s, before);
        assert!(c.is_dragging());
    }

    #[test]
    fn unmeasurable_container_skips_the_event() {
        let mut c = InteractionController::new();
        let mut s = RadiusState::default();
        c.press_handle(HandleId::Right);
        let none = || -> Option<BoundingMeasurement> { None };
        assert_eq!(c.pointer_moved(Vec2::new(10.0, 10.0), &none, &mut s), None);
    }

    #[test]
    fn every_move_measures_the_container_afresh() {
        let mut c = InteractionController::new();
        let mut s = RadiusState::default();
        let width = Cell::new(200.0_f32);
        let calls = Cell::new(0u32);
        let measure = || {
            calls.set(calls.get() + 1);
            Some(BoundingMeasurement::new(0.0, 0.0, width.get(), 200.0))
        };

        c.press_handle(HandleId::Top);
        assert_eq!(c.pointer_moved(Vec2::new(100.0, 0.0), &measure, &mut s).map(|u| u.percent), Some(50));
        width.set(400.0);
        assert_eq!(c.pointer_moved(Vec2::new(100.0, 0.0), &measure, &mut s).map(|u| u.percent), Some(25));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn same_coordinate_twice_is_idempotent() {
        let mut c = InteractionController::new();
        let mut s = RadiusState::default();
        c.press_handle(HandleId::Left);
        let a = c.pointer_moved(Vec2::new(0.0, 137.0), &square(300.0), &mut s);
        let after_once = *s.radius();
        let b = c.pointer_moved(Vec2::new(0.0, 137.0), &square(300.0), &mut s);
        assert_eq!(a, b);
        assert_eq!(s.radius(), &after_once);
    }

    #[test]
    fn offset_is_unrounded_while_percent_is_rounded() {
        let mut c = InteractionController::new();
        let mut s = RadiusState::default();
        c.press_handle(HandleId::Top);
        let upd = c.pointer_moved(Vec2::new(1.0, 0.0), &square(3.0), &mut s).unwrap();
        assert_eq!(upd.percent, 33);
        assert_eq!(upd.offset, 1.0 / 3.0);
    }
}
