use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};

/// Current input state for a single window.
///
/// Holds "is down" information and the current pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoids stuck buttons when focus changes mid-press.
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((*x, *y));

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton, state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button, state, x: 4.0, y: 8.0 })
    }

    #[test]
    fn press_and_release_record_transitions() {
        let mut st = InputState::default();
        let mut frame = InputFrame::default();

        st.apply_event(&mut frame, press(MouseButton::Left, MouseButtonState::Pressed));
        assert!(st.button_down(MouseButton::Left));
        assert!(frame.buttons_pressed.contains(&MouseButton::Left));
        assert_eq!(st.pointer_pos, Some((4.0, 8.0)));

        st.apply_event(&mut frame, press(MouseButton::Left, MouseButtonState::Released));
        assert!(!st.button_down(MouseButton::Left));
        assert!(frame.buttons_released.contains(&MouseButton::Left));
        assert_eq!(frame.events.len(), 2);
    }

    #[test]
    fn release_without_press_is_not_a_transition() {
        let mut st = InputState::default();
        let mut frame = InputFrame::default();
        st.apply_event(&mut frame, press(MouseButton::Left, MouseButtonState::Released));
        assert!(frame.buttons_released.is_empty());
        // The raw event is still kept for consumers that listen process-wide.
        assert_eq!(frame.events.len(), 1);
    }

    #[test]
    fn focus_loss_clears_held_buttons() {
        let mut st = InputState::default();
        let mut frame = InputFrame::default();
        st.apply_event(&mut frame, press(MouseButton::Left, MouseButtonState::Pressed));
        st.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(st.buttons_down.is_empty());
    }

    #[test]
    fn pointer_left_forgets_position() {
        let mut st = InputState::default();
        let mut frame = InputFrame::default();
        st.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 2.0 }));
        st.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(st.pointer_pos, None);
    }
}
