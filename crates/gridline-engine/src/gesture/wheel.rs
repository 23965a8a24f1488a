use crate::input::{MouseWheelDelta, WheelEvent};

/// Pixels scrolled per wheel "line".
pub const LINE_HEIGHT: f64 = 40.0;

/// `wheel_delta` units per wheel "line".
pub const WHEEL_DELTA_PER_LINE: f64 = 120.0;

/// One wheel event in the units the gesture math expects.
///
/// `delta_*` are scrolled pixels with "scroll down" positive. `wheel_delta`
/// uses the classic 120-per-notch convention with "scroll up" positive.
/// `offset_*` is the cursor position in surface pixels, top-left origin.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct WheelGesture {
    pub delta_x: f64,
    pub delta_y: f64,
    pub wheel_delta: f64,
    pub ctrl: bool,
    pub alt: bool,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl WheelGesture {
    /// Translates a platform-agnostic wheel event.
    ///
    /// Meta counts as Ctrl so trackpad pinch-to-zoom on macOS (reported with
    /// the command modifier) zooms instead of panning.
    pub fn from_input(event: &WheelEvent) -> Self {
        let (delta_x, delta_y, wheel_delta) = match event.delta {
            MouseWheelDelta::Line { x, y } => (
                -f64::from(x) * LINE_HEIGHT,
                -f64::from(y) * LINE_HEIGHT,
                f64::from(y) * WHEEL_DELTA_PER_LINE,
            ),
            MouseWheelDelta::Pixel { x, y } => (-f64::from(x), -f64::from(y), 3.0 * f64::from(y)),
        };

        Self {
            delta_x,
            delta_y,
            wheel_delta,
            ctrl: event.modifiers.ctrl || event.modifiers.meta,
            alt: event.modifiers.alt,
            offset_x: f64::from(event.x),
            offset_y: f64::from(event.y),
        }
    }
}

impl From<&WheelEvent> for WheelGesture {
    fn from(event: &WheelEvent) -> Self {
        Self::from_input(event)
    }
}
