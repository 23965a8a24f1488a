use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    ButtonEvent, ButtonState, InputEvent, Key, Modifiers, MouseButton, MouseWheelDelta, WheelEvent,
};

/// Input held right now in the window: modifiers, pointer, keys and buttons.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    /// Pointer position in logical pixels; `None` outside the window.
    pub pointer: Option<(f32, f32)>,
    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Folds `ev` into the held state and records the transition in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Modifiers(m) => self.modifiers = *m,

            InputEvent::PointerMoved { x, y } => self.pointer = Some((*x, *y)),
            InputEvent::PointerLeft => self.pointer = None,

            InputEvent::Key { key, state, repeat } => match state {
                ButtonState::Pressed => {
                    if self.keys_down.insert(*key) && !repeat {
                        frame.keys_pressed.insert(*key);
                    }
                }
                ButtonState::Released => {
                    self.keys_down.remove(key);
                }
            },

            InputEvent::Button(press) => match press.state {
                ButtonState::Pressed => {
                    if self.buttons_down.insert(press.button) {
                        frame.clicks.push(*press);
                    }
                }
                ButtonState::Released => {
                    self.buttons_down.remove(&press.button);
                }
            },

            InputEvent::Wheel(wheel) => frame.wheel.push(*wheel),

            // Releases are not delivered while unfocused.
            InputEvent::FocusLost => {
                self.keys_down.clear();
                self.buttons_down.clear();
                self.modifiers = Modifiers::default();
            }
        }

        frame.events.push(ev);
    }

    /// Pointer position, or the window origin before the first move.
    fn pointer_or_origin(&self) -> (f32, f32) {
        self.pointer.unwrap_or((0.0, 0.0))
    }

    /// Stamps a wheel delta with the current pointer and modifiers; winit
    /// reports neither with wheel events.
    pub fn wheel_event(&self, delta: MouseWheelDelta) -> WheelEvent {
        let (x, y) = self.pointer_or_origin();
        WheelEvent {
            delta,
            modifiers: self.modifiers,
            x,
            y,
        }
    }

    pub fn button_event(&self, button: MouseButton, state: ButtonState) -> ButtonEvent {
        let (x, y) = self.pointer_or_origin();
        ButtonEvent {
            button,
            state,
            modifiers: self.modifiers,
            x,
            y,
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: ButtonState) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            repeat: false,
        }
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn key_press_recorded_once_while_held() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Space, ButtonState::Pressed));
        assert!(frame.key_pressed(Key::Space));
        frame.clear();

        state.apply_event(&mut frame, key(Key::Space, ButtonState::Pressed));
        assert!(!frame.key_pressed(Key::Space));
        assert!(state.key_down(Key::Space));

        state.apply_event(&mut frame, key(Key::Space, ButtonState::Released));
        assert!(!state.key_down(Key::Space));
    }

    #[test]
    fn auto_repeat_is_not_a_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let repeat = InputEvent::Key {
            key: Key::Enter,
            state: ButtonState::Pressed,
            repeat: true,
        };

        state.apply_event(&mut frame, repeat);
        assert!(!frame.key_pressed(Key::Enter));
        assert_eq!(frame.events.len(), 1);
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.modifiers.ctrl = true;
        state.apply_event(&mut frame, key(Key::Escape, ButtonState::Pressed));
        let press = state.button_event(MouseButton::Left, ButtonState::Pressed);
        state.apply_event(&mut frame, InputEvent::Button(press));

        state.apply_event(&mut frame, InputEvent::FocusLost);
        assert!(state.keys_down.is_empty());
        assert!(state.buttons_down.is_empty());
        assert!(!state.modifiers.command());
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn wheel_uses_tracked_pointer_and_modifiers() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::default()
        };

        state.apply_event(&mut frame, InputEvent::PointerMoved { x: 12.0, y: 34.0 });
        state.apply_event(&mut frame, InputEvent::Modifiers(ctrl));

        let wheel = state.wheel_event(MouseWheelDelta::Line { x: 0.0, y: 1.0 });
        state.apply_event(&mut frame, InputEvent::Wheel(wheel));

        assert_eq!(frame.wheel.len(), 1);
        assert_eq!((frame.wheel[0].x, frame.wheel[0].y), (12.0, 34.0));
        assert!(frame.wheel[0].modifiers.ctrl);
        assert_eq!(frame.events.len(), 3);
    }

    #[test]
    fn wheel_before_any_move_is_at_origin() {
        let state = InputState::default();
        let wheel = state.wheel_event(MouseWheelDelta::Pixel { x: 1.0, y: 2.0 });
        assert_eq!((wheel.x, wheel.y), (0.0, 0.0));
    }

    #[test]
    fn click_recorded_with_modifiers() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.modifiers.alt = true;
        state.pointer = Some((5.0, 6.0));

        let press = state.button_event(MouseButton::Left, ButtonState::Pressed);
        state.apply_event(&mut frame, InputEvent::Button(press));
        let release = state.button_event(MouseButton::Left, ButtonState::Released);
        state.apply_event(&mut frame, InputEvent::Button(release));

        assert_eq!(frame.clicks.len(), 1);
        assert_eq!((frame.clicks[0].x, frame.clicks[0].y), (5.0, 6.0));
        assert!(frame.clicks[0].modifiers.command());
        assert!(!state.button_down(MouseButton::Left));
    }

    #[test]
    fn pointer_left_forgets_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved { x: 1.0, y: 1.0 });
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer, None);
    }

    // ── frame ─────────────────────────────────────────────────────────────

    #[test]
    fn frame_clear_drops_transitions() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::Enter, ButtonState::Pressed));
        let wheel = state.wheel_event(MouseWheelDelta::Line { x: 0.0, y: -1.0 });
        state.apply_event(&mut frame, InputEvent::Wheel(wheel));

        frame.clear();
        assert!(frame.is_empty());
        assert!(frame.wheel.is_empty());
        assert!(!frame.key_pressed(Key::Enter));
        assert!(state.key_down(Key::Enter));
    }
}
