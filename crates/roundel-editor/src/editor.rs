//! The editor component: layout, input routing, painting.

use std::time::Instant;

use roundel_engine::coords::{CornerRadii, Rect, Vec2, Viewport};
use roundel_engine::input::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};
use roundel_engine::paint::Color;
use roundel_engine::scene::{Border, DrawList, ZIndex};
use roundel_engine::window::CursorIcon;

use crate::clipboard::{self, ClipboardWriter, CopyNotice};
use crate::config::EditorConfig;
use crate::controller::InteractionController;
use crate::geometry::BoundingMeasurement;
use crate::handle::HandleId;
use crate::pointer::{PointerSource, PointerSubscription};
use crate::state::RadiusState;

/// Acknowledgment shown after a successful copy.
pub const COPIED_TEXT: &str = "Copied to Clipboard";

const BUTTON_GAP: f32 = 32.0;
const BUTTON_HEIGHT: f32 = 40.0;
/// Extra hit slop around a handle, in logical pixels.
const HANDLE_SLOP: f32 = 4.0;

// ── EditorLayout ──────────────────────────────────────────────────────────

/// Screen placement of the editor parts for one window size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EditorLayout {
    pub container: Rect,
    pub copy_button: Rect,
    pub handle_radius: f32,
    /// Handle centres, in `HandleId::ALL` order.
    handles: [Vec2; 4],
}

impl EditorLayout {
    /// The radius container: a centred square whose side is
    /// `container_fraction` of the smaller window dimension, shifted up to
    /// leave room for the copy button below it.
    pub fn container_rect(viewport: Viewport, config: &EditorConfig) -> Rect {
        let side = viewport.width.min(viewport.height) * config.container_fraction;
        let block_h = side + BUTTON_GAP + BUTTON_HEIGHT;
        let x = (viewport.width - side) * 0.5;
        let y = (viewport.height - block_h) * 0.5;
        Rect::new(x, y, side, side)
    }

    pub fn compute(viewport: Viewport, config: &EditorConfig, state: &RadiusState) -> Self {
        let container = Self::container_rect(viewport, config);
        let (min, max) = (container.origin, container.max());

        let button_w = (container.size.x * 0.5).max(120.0);
        let copy_button = Rect::new(
            container.center().x - button_w * 0.5,
            max.y + BUTTON_GAP,
            button_w,
            BUTTON_HEIGHT,
        );

        let handles = HandleId::ALL.map(|h| {
            let t = state.offset(h);
            match h {
                HandleId::Top => Vec2::new(min.x + t * container.size.x, min.y),
                HandleId::Bottom => Vec2::new(min.x + t * container.size.x, max.y),
                HandleId::Right => Vec2::new(max.x, min.y + t * container.size.y),
                HandleId::Left => Vec2::new(min.x, min.y + t * container.size.y),
            }
        });

        Self { container, copy_button, handle_radius: config.handle_radius, handles }
    }

    pub fn handle_center(&self, handle: HandleId) -> Vec2 {
        let i = HandleId::ALL.iter().position(|h| *h == handle).unwrap_or(0);
        self.handles[i]
    }

    /// Handle under `pos`; the nearest one wins when hit areas overlap.
    pub fn handle_at(&self, pos: Vec2) -> Option<HandleId> {
        let reach = self.handle_radius + HANDLE_SLOP;
        HandleId::ALL
            .into_iter()
            .zip(self.handles)
            .map(|(h, c)| (h, c.distance_sq(pos)))
            .filter(|(_, d)| *d <= reach * reach)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(h, _)| h)
    }

    pub fn measurement(&self) -> BoundingMeasurement {
        BoundingMeasurement::from_rect(self.container)
    }
}

// ── RadiusEditor ──────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Hover {
    Handle(HandleId),
    CopyButton,
}

/// The border-radius editor component.
///
/// Press events are hit-tested against the handles and the copy button.
/// Moves and releases are handled wherever the pointer is, as long as the
/// component's pointer subscription is live.
pub struct RadiusEditor {
    config: EditorConfig,
    state: RadiusState,
    controller: InteractionController,
    notice: CopyNotice,
    clipboard: Box<dyn ClipboardWriter>,
    subscription: PointerSubscription,

    /// Last known logical window size; the container is measured from it.
    viewport: Viewport,
    hover: Option<Hover>,
    /// Copy fires on release over the button it was pressed on.
    copy_armed: bool,
}

impl RadiusEditor {
    /// Mounts the editor, subscribing it to `pointer`.
    pub fn mount(
        config: EditorConfig,
        pointer: &PointerSource,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Self {
        Self {
            state: RadiusState::new(config.initial),
            notice: CopyNotice::new(config.notice_duration),
            config,
            controller: InteractionController::new(),
            clipboard,
            subscription: pointer.subscribe(),
            viewport: Viewport::default(),
            hover: None,
            copy_armed: false,
        }
    }

    #[inline]
    pub fn state(&self) -> &RadiusState {
        &self.state
    }

    #[inline]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    #[inline]
    pub fn notice(&self) -> &CopyNotice {
        &self.notice
    }

    #[inline]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// True while window-wide moves and releases reach this editor.
    pub fn is_listening(&self) -> bool {
        self.subscription.is_live()
    }

    /// Updates the window size the layout is computed from.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn layout(&self) -> EditorLayout {
        EditorLayout::compute(self.viewport, &self.config, &self.state)
    }

    /// Live container box for the current window size.
    fn container_bounds(viewport: Viewport, config: &EditorConfig) -> Option<BoundingMeasurement> {
        if !viewport.is_valid() {
            return None;
        }
        Some(BoundingMeasurement::from_rect(EditorLayout::container_rect(viewport, config)))
    }

    /// Routes one input event. Returns `true` when the editor changed in a
    /// way that needs a redraw.
    pub fn handle_input(&mut self, event: &InputEvent, now: Instant) -> bool {
        match event {
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x,
                y,
            }) => self.pointer_pressed(Vec2::new(*x, *y)),

            InputEvent::PointerButton(PointerButtonEvent {
                button,
                state: MouseButtonState::Released,
                x,
                y,
            }) => self.pointer_released(*button, Vec2::new(*x, *y), now),

            InputEvent::PointerMoved(m) => self.pointer_moved(Vec2::new(m.x, m.y)),

            InputEvent::PointerLeft => self.hover.take().is_some(),

            InputEvent::Focused(false) => {
                self.copy_armed = false;
                self.controller.focus_lost().is_some()
            }

            _ => false,
        }
    }

    fn pointer_pressed(&mut self, pos: Vec2) -> bool {
        let layout = self.layout();
        if let Some(handle) = layout.handle_at(pos) {
            self.controller.press_handle(handle);
            return true;
        }
        if layout.copy_button.contains(pos) {
            self.copy_armed = true;
            return true;
        }
        false
    }

    fn pointer_moved(&mut self, pos: Vec2) -> bool {
        let mut changed = false;

        if self.is_listening() {
            let (viewport, config) = (self.viewport, &self.config);
            let measure = || Self::container_bounds(viewport, config);
            changed |= self.controller.pointer_moved(pos, &measure, &mut self.state).is_some();
        }

        let hover = self.hit(pos);
        if hover != self.hover {
            self.hover = hover;
            changed = true;
        }
        changed
    }

    /// Any button release ends a drag; only the left button clicks the copy
    /// button.
    fn pointer_released(&mut self, button: MouseButton, pos: Vec2, now: Instant) -> bool {
        let mut changed = false;
        if self.is_listening() {
            changed |= self.controller.release().is_some();
        }
        if button != MouseButton::Left {
            return changed;
        }

        if std::mem::take(&mut self.copy_armed) && self.layout().copy_button.contains(pos) {
            self.copy(now);
            changed = true;
        }
        changed
    }

    fn hit(&self, pos: Vec2) -> Option<Hover> {
        let layout = self.layout();
        if let Some(h) = layout.handle_at(pos) {
            Some(Hover::Handle(h))
        } else if layout.copy_button.contains(pos) {
            Some(Hover::CopyButton)
        } else {
            None
        }
    }

    /// Copies the current value string to the clipboard.
    ///
    /// Returns `true` when the write succeeded and the notice is showing.
    pub fn copy(&mut self, now: Instant) -> bool {
        clipboard::export(self.clipboard.as_mut(), self.state.radius(), &mut self.notice, now)
            .is_ok()
    }

    /// Next instant at which the editor's appearance changes on its own.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        self.notice.expires_at().filter(|end| now < *end)
    }

    /// Window title: the value string, plus the acknowledgment while shown.
    pub fn title(&self, now: Instant) -> String {
        let value = self.state.value_string();
        if self.notice.is_visible(now) {
            format!("border-radius: {value} | {COPIED_TEXT}")
        } else {
            format!("border-radius: {value}")
        }
    }

    pub fn cursor(&self) -> CursorIcon {
        if self.controller.is_dragging() {
            return CursorIcon::Grabbing;
        }
        match self.hover {
            Some(Hover::Handle(_)) => CursorIcon::Grab,
            Some(Hover::CopyButton) => CursorIcon::Pointer,
            None => CursorIcon::Default,
        }
    }

    pub fn background(&self) -> Color {
        self.config.palette.background
    }

    /// Records the editor into `list`.
    pub fn paint(&self, list: &mut DrawList, now: Instant) {
        let layout = self.layout();
        if layout.container.is_empty() {
            return;
        }
        let palette = &self.config.palette;
        let container = layout.container;

        // Container frame.
        list.push_blob(
            ZIndex::new(0),
            container,
            CornerRadii::all(6.0),
            palette.container_fill,
            Some(Border::new(1.5, palette.container_border)),
        );

        // Shape.
        list.push_blob(
            ZIndex::new(1),
            container,
            self.state.radius().corner_radii(container.size),
            palette.shape_fill,
            None,
        );

        // Handles.
        let active = self.controller.active_handle();
        for handle in HandleId::ALL {
            let hovered = self.hover == Some(Hover::Handle(handle));
            let fill = if active == Some(handle) { palette.handle_active } else { palette.handle_fill };
            let r = if hovered || active == Some(handle) {
                layout.handle_radius + 1.5
            } else {
                layout.handle_radius
            };
            list.push_circle(
                ZIndex::new(2),
                layout.handle_center(handle),
                r,
                fill,
                Some(Border::new(2.0, palette.handle_border)),
            );
        }

        // Copy button with a two-sheet glyph.
        let button = layout.copy_button;
        let fill = if self.notice.is_visible(now) {
            palette.button_copied
        } else if self.hover == Some(Hover::CopyButton) {
            palette.button_hover
        } else {
            palette.button_fill
        };
        list.push_rounded_rect(ZIndex::new(1), button, 8.0, fill);

        let sheet = Vec2::new(12.0, 14.0);
        let c = button.center();
        for offset in [Vec2::new(-2.5, -2.5), Vec2::new(2.5, 2.5)] {
            list.push_blob(
                ZIndex::new(2),
                Rect::from_center(c + offset, sheet),
                CornerRadii::all(2.0),
                Color::transparent(),
                Some(Border::new(1.5, palette.handle_fill)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardError;
    use roundel_engine::input::PointerMoveEvent;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct SharedClipboard {
        writes: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl ClipboardWriter for SharedClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("test".into()));
            }
            self.writes.borrow_mut().push(text.to_owned());
            Ok(())
        }
    }

    const VIEW: Viewport = Viewport::new(800.0, 800.0);

    fn editor(source: &PointerSource, cb: SharedClipboard) -> RadiusEditor {
        let mut e = RadiusEditor::mount(EditorConfig::default(), source, Box::new(cb));
        e.set_viewport(VIEW);
        e
    }

    fn press(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
        })
    }

    fn release(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Released,
            x,
            y,
        })
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn container_is_centred_horizontally() {
        let r = EditorLayout::container_rect(VIEW, &EditorConfig::default());
        assert!((r.center().x - 400.0).abs() < 1e-3);
        assert_eq!(r.size.x, r.size.y);
    }

    #[test]
    fn handles_sit_on_their_edges_at_initial_offsets() {
        let layout = EditorLayout::compute(VIEW, &EditorConfig::default(), &RadiusState::default());
        let c = layout.container;
        let top = layout.handle_center(HandleId::Top);
        assert_eq!(top.y, c.origin.y);
        assert!((top.x - (c.origin.x + 0.3 * c.size.x)).abs() < 1e-3);
        assert_eq!(layout.handle_center(HandleId::Right).x, c.max().x);
        assert_eq!(layout.handle_center(HandleId::Bottom).y, c.max().y);
        assert_eq!(layout.handle_center(HandleId::Left).x, c.origin.x);
    }

    #[test]
    fn handle_hit_test_uses_radius_and_slop() {
        let layout = EditorLayout::compute(VIEW, &EditorConfig::default(), &RadiusState::default());
        let top = layout.handle_center(HandleId::Top);
        assert_eq!(layout.handle_at(top), Some(HandleId::Top));
        assert_eq!(layout.handle_at(top + Vec2::new(0.0, 12.0)), Some(HandleId::Top));
        assert_eq!(layout.handle_at(top + Vec2::new(0.0, 40.0)), None);
    }

    // ── drag flow ─────────────────────────────────────────────────────────

    #[test]
    fn drag_top_handle_to_container_midpoint() {
        let source = PointerSource::new();
        let mut e = editor(&source, SharedClipboard::default());
        let now = Instant::now();
        let layout = e.layout();
        let top = layout.handle_center(HandleId::Top);

        assert!(e.handle_input(&press(top.x, top.y), now));
        assert_eq!(e.controller().active_handle(), Some(HandleId::Top));

        let mid = layout.container.center();
        assert!(e.handle_input(&moved(mid.x, -500.0), now));
        assert_eq!(e.state().radius().horizontal.top, 50);
        assert_eq!(e.state().radius().horizontal.right, 50);

        // Release far outside the container still ends the drag.
        assert!(e.handle_input(&release(-100.0, -100.0), now));
        assert!(!e.controller().is_dragging());

        let before = e.state().clone();
        e.handle_input(&moved(0.0, 0.0), now);
        assert_eq!(e.state(), &before);
    }

    #[test]
    fn release_of_any_button_ends_the_drag() {
        let source = PointerSource::new();
        let mut e = editor(&source, SharedClipboard::default());
        let top = e.layout().handle_center(HandleId::Top);
        e.handle_input(&press(top.x, top.y), Instant::now());

        let right_up = InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Right,
            state: MouseButtonState::Released,
            x: -50.0,
            y: -50.0,
        });
        assert!(e.handle_input(&right_up, Instant::now()));
        assert!(!e.controller().is_dragging());
    }

    #[test]
    fn only_left_release_clicks_the_copy_button() {
        let source = PointerSource::new();
        let cb = SharedClipboard::default();
        let mut e = editor(&source, cb.clone());
        let b = e.layout().copy_button.center();
        e.handle_input(&press(b.x, b.y), Instant::now());

        let middle_up = InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Middle,
            state: MouseButtonState::Released,
            x: b.x,
            y: b.y,
        });
        e.handle_input(&middle_up, Instant::now());
        assert!(cb.writes.borrow().is_empty());

        e.handle_input(&release(b.x, b.y), Instant::now());
        assert_eq!(cb.writes.borrow().len(), 1);
    }

    #[test]
    fn press_on_empty_space_starts_nothing() {
        let source = PointerSource::new();
        let mut e = editor(&source, SharedClipboard::default());
        assert!(!e.handle_input(&press(1.0, 1.0), Instant::now()));
        assert!(!e.controller().is_dragging());
    }

    #[test]
    fn focus_loss_releases_drag() {
        let source = PointerSource::new();
        let mut e = editor(&source, SharedClipboard::default());
        let top = e.layout().handle_center(HandleId::Top);
        e.handle_input(&press(top.x, top.y), Instant::now());
        assert!(e.handle_input(&InputEvent::Focused(false), Instant::now()));
        assert!(!e.controller().is_dragging());
    }

    #[test]
    fn zero_sized_window_skips_moves() {
        let source = PointerSource::new();
        let mut e = editor(&source, SharedClipboard::default());
        let top = e.layout().handle_center(HandleId::Top);
        e.handle_input(&press(top.x, top.y), Instant::now());

        e.set_viewport(Viewport::new(0.0, 0.0));
        let before = *e.state().radius();
        e.handle_input(&moved(10.0, 10.0), Instant::now());
        assert_eq!(e.state().radius(), &before);
        assert!(e.controller().is_dragging());
    }

    #[test]
    fn dead_subscription_stops_window_wide_moves() {
        let source = PointerSource::new();
        let mut e = editor(&source, SharedClipboard::default());
        let top = e.layout().handle_center(HandleId::Top);
        e.handle_input(&press(top.x, top.y), Instant::now());

        drop(source);
        assert!(!e.is_listening());
        let before = *e.state().radius();
        let mid = e.layout().container.center();
        e.handle_input(&moved(mid.x, mid.y), Instant::now());
        assert_eq!(e.state().radius(), &before);
    }

    // ── mount lifecycle ───────────────────────────────────────────────────

    #[test]
    fn subscription_released_when_editor_dropped() {
        let source = PointerSource::new();
        let e = editor(&source, SharedClipboard::default());
        assert_eq!(source.subscriber_count(), 1);
        assert!(e.is_listening());
        drop(e);
        assert_eq!(source.subscriber_count(), 0);
    }

    // ── copy ──────────────────────────────────────────────────────────────

    #[test]
    fn click_on_copy_button_copies_and_shows_notice() {
        let source = PointerSource::new();
        let cb = SharedClipboard::default();
        let mut e = editor(&source, cb.clone());
        let t0 = Instant::now();
        let b = e.layout().copy_button.center();

        e.handle_input(&press(b.x, b.y), t0);
        assert!(cb.writes.borrow().is_empty());
        assert!(e.handle_input(&release(b.x, b.y), t0));

        assert_eq!(*cb.writes.borrow(), vec!["30% 70% 70% 30% / 30% 30% 70% 70%".to_string()]);
        assert!(e.notice().is_visible(t0));
        assert_eq!(e.title(t0), "border-radius: 30% 70% 70% 30% / 30% 30% 70% 70% | Copied to Clipboard");
        assert_eq!(e.next_deadline(t0), Some(t0 + Duration::from_millis(2000)));

        let later = t0 + Duration::from_millis(2000);
        assert!(!e.notice().is_visible(later));
        assert_eq!(e.title(later), "border-radius: 30% 70% 70% 30% / 30% 30% 70% 70%");
        assert_eq!(e.next_deadline(later), None);
    }

    #[test]
    fn release_off_the_button_does_not_copy() {
        let source = PointerSource::new();
        let cb = SharedClipboard::default();
        let mut e = editor(&source, cb.clone());
        let b = e.layout().copy_button.center();
        e.handle_input(&press(b.x, b.y), Instant::now());
        e.handle_input(&release(1.0, 1.0), Instant::now());
        assert!(cb.writes.borrow().is_empty());
    }

    #[test]
    fn failed_copy_keeps_notice_hidden() {
        let source = PointerSource::new();
        let mut e = editor(&source, SharedClipboard { fail: true, ..Default::default() });
        let t0 = Instant::now();
        assert!(!e.copy(t0));
        assert!(!e.notice().is_visible(t0));
        assert_eq!(e.next_deadline(t0), None);
    }

    #[test]
    fn copy_exports_the_dragged_value() {
        let source = PointerSource::new();
        let cb = SharedClipboard::default();
        let mut e = editor(&source, cb.clone());
        let now = Instant::now();
        let layout = e.layout();
        let right = layout.handle_center(HandleId::Right);
        e.handle_input(&press(right.x, right.y), now);
        e.handle_input(&moved(right.x, layout.container.max().y + 50.0), now);
        e.handle_input(&release(0.0, 0.0), now);
        assert!(e.copy(now));
        assert_eq!(cb.writes.borrow()[0], "30% 70% 70% 30% / 30% 100% 0% 70%");
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn paint_records_frame_shape_handles_and_button() {
        let source = PointerSource::new();
        let e = editor(&source, SharedClipboard::default());
        let mut list = DrawList::new();
        e.paint(&mut list, Instant::now());
        // frame + shape + 4 handles + button + 2 glyph sheets
        assert_eq!(list.items().len(), 9);
    }

    #[test]
    fn paint_skips_empty_viewport() {
        let source = PointerSource::new();
        let mut e = editor(&source, SharedClipboard::default());
        e.set_viewport(Viewport::new(0.0, 0.0));
        let mut list = DrawList::new();
        e.paint(&mut list, Instant::now());
        assert!(list.is_empty());
    }
}
