//! Input subsystem.
//!
//! Windowing events are translated into the winit-free [`InputEvent`] by
//! the runtime; apps read the held state from [`InputState`] and this
//! frame's transitions (keys, clicks, wheel) from [`InputFrame`].

mod frame;
mod state;
mod types;

pub(crate) mod platform;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    ButtonEvent, ButtonState, InputEvent, Key, Modifiers, MouseButton, MouseWheelDelta, WheelEvent,
};
