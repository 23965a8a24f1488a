use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use crate::input::{ButtonState, InputEvent, InputState, Key, Modifiers, MouseButton, MouseWheelDelta};

/// Maps a winit window event onto an [`InputEvent`], or `None` when it
/// carries no input.
///
/// Positions are converted to logical pixels. Button and wheel events are
/// stamped with the pointer and modifiers tracked in `state`.
pub(crate) fn translate_window_event(
    window: &Window,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    let ev = match event {
        WindowEvent::ModifiersChanged(m) => {
            let m = m.state();
            InputEvent::Modifiers(Modifiers {
                shift: m.shift_key(),
                ctrl: m.control_key(),
                alt: m.alt_key(),
                meta: m.super_key(),
            })
        }

        WindowEvent::Focused(false) => InputEvent::FocusLost,

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = logical(window, *position);
            InputEvent::PointerMoved { x, y }
        }
        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,

        WindowEvent::MouseInput { state: st, button, .. } => {
            InputEvent::Button(state.button_event(button_of(*button), button_state(*st)))
        }

        WindowEvent::MouseWheel { delta, .. } => {
            let delta = match *delta {
                MouseScrollDelta::LineDelta(x, y) => MouseWheelDelta::Line { x, y },
                MouseScrollDelta::PixelDelta(p) => {
                    let (x, y) = logical(window, p);
                    MouseWheelDelta::Pixel { x, y }
                }
            };
            InputEvent::Wheel(state.wheel_event(delta))
        }

        WindowEvent::KeyboardInput { event, .. } => InputEvent::Key {
            key: key_of(event.physical_key),
            state: button_state(event.state),
            repeat: event.repeat,
        },

        _ => return None,
    };
    Some(ev)
}

fn logical(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let p = pos.to_logical::<f64>(window.scale_factor());
    (p.x as f32, p.y as f32)
}

fn button_state(st: ElementState) -> ButtonState {
    if st.is_pressed() {
        ButtonState::Pressed
    } else {
        ButtonState::Released
    }
}

fn button_of(b: WinitButton) -> MouseButton {
    match b {
        WinitButton::Left => MouseButton::Left,
        WinitButton::Right => MouseButton::Right,
        WinitButton::Middle => MouseButton::Middle,
        WinitButton::Back => MouseButton::Other(3),
        WinitButton::Forward => MouseButton::Other(4),
        WinitButton::Other(v) => MouseButton::Other(v),
    }
}

fn key_of(pk: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = pk else {
        return Key::Other(0);
    };
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Space => Key::Space,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::ShiftLeft
        | KeyCode::ShiftRight
        | KeyCode::ControlLeft
        | KeyCode::ControlRight
        | KeyCode::AltLeft
        | KeyCode::AltRight
        | KeyCode::SuperLeft
        | KeyCode::SuperRight => Key::Modifier,
        other => Key::Other(other as u32),
    }
}
