/// Keys the studio binds. Modifier keys report as [`Key::Modifier`]; their
/// held state arrives separately as [`Modifiers`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,
    Enter,
    Modifier,
    /// Any other key, by platform key code (0 when the platform has none).
    Other(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Press or release of a key or mouse button.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Modifier keys held during an event.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl, Alt or Meta held. Clicking with one of these resets the view.
    pub fn command(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Raw wheel delta as reported by the platform.
///
/// `Line` comes from notched wheels, `Pixel` from trackpads. Positive `y`
/// scrolls the content up (wheel pushed away from the user).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

/// Wheel movement with the pointer position (logical pixels) and modifiers
/// in effect when it fired.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WheelEvent {
    pub delta: MouseWheelDelta,
    pub modifiers: Modifiers,
    pub x: f32,
    pub y: f32,
}

/// Mouse button transition at a pointer position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonEvent {
    pub button: MouseButton,
    pub state: ButtonState,
    pub modifiers: Modifiers,
    pub x: f32,
    pub y: f32,
}

/// Platform-agnostic input, as translated by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Modifiers(Modifiers),
    Key {
        key: Key,
        state: ButtonState,
        repeat: bool,
    },
    PointerMoved {
        x: f32,
        y: f32,
    },
    PointerLeft,
    Button(ButtonEvent),
    Wheel(WheelEvent),
    FocusLost,
}
