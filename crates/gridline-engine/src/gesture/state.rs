use crate::coords::{Vec2, Viewport};

use super::scale::{normalize_scale, FINE_ZOOM_DIVISOR, ZOOM_DIVISOR};
use super::wheel::WheelGesture;

/// Accumulated pan offset and raw (un-normalized) scale.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GestureState {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl GestureState {
    #[inline]
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Rendering scale factor (`normalize_scale(self.scale)`).
    #[inline]
    pub fn scale_factor(&self) -> f64 {
        normalize_scale(self.scale)
    }

    /// Pan offset as uploaded to the shader.
    #[inline]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// `(offset, scale_factor)` ready for the `offset` / `scale` uniforms.
    #[inline]
    pub fn transform(&self) -> (Vec2, f32) {
        (self.offset(), self.scale_factor() as f32)
    }

    /// Applies one wheel event in place.
    pub fn apply(&mut self, event: &WheelGesture, size: Viewport) {
        *self = update(*self, event, size);
    }

    pub fn reset(&mut self) {
        *self = reset(*self);
    }

    /// Scene position to NDC under this state.
    #[inline]
    pub fn world_to_ndc(&self, (wx, wy): (f64, f64)) -> (f64, f64) {
        let s = self.scale_factor();
        ((wx + self.x) * s, (wy + self.y) * s)
    }

    /// Inverse of [`world_to_ndc`](Self::world_to_ndc).
    #[inline]
    pub fn ndc_to_world(&self, (nx, ny): (f64, f64)) -> (f64, f64) {
        let s = self.scale_factor();
        (nx / s - self.x, ny / s - self.y)
    }
}

/// Cursor position in surface pixels (top-left origin) to NDC.
#[inline]
pub fn screen_to_ndc(offset_x: f64, offset_y: f64, size: Viewport) -> (f64, f64) {
    let (w, h) = (f64::from(size.width), f64::from(size.height));
    (2.0 * offset_x / w - 1.0, 1.0 - 2.0 * offset_y / h)
}

/// NDC to surface pixels (top-left origin).
#[inline]
pub fn ndc_to_screen((nx, ny): (f64, f64), size: Viewport) -> (f64, f64) {
    let (w, h) = (f64::from(size.width), f64::from(size.height));
    ((nx + 1.0) * w / 2.0, (1.0 - ny) * h / 2.0)
}

/// Returns the state after one wheel event on a surface of `size`.
///
/// Without Ctrl the event pans; the pan is divided by the current scale so
/// a given drag distance moves the scene the same amount on screen at any
/// zoom level. Screen Y grows downward, hence the opposite signs.
///
/// With Ctrl the event zooms around the cursor (Alt for finer steps).
///
/// A degenerate surface leaves the state unchanged.
pub fn update(state: GestureState, event: &WheelGesture, size: Viewport) -> GestureState {
    if !size.is_valid() {
        log::debug!("gesture ignored on degenerate surface {size:?}");
        return state;
    }

    let (w, h) = (f64::from(size.width), f64::from(size.height));
    let current = state.scale_factor();
    let mut next = state;

    if !event.ctrl {
        next.x -= event.delta_x / (w * current);
        next.y += event.delta_y / (h * current);
        return next;
    }

    let divisor = if event.alt { FINE_ZOOM_DIVISOR } else { ZOOM_DIVISOR };
    let raw = state.scale + event.wheel_delta / divisor;
    let target = normalize_scale(raw);

    let (mx, my) = screen_to_ndc(event.offset_x, event.offset_y, size);
    let ds = (target - current) / (target * current);

    next.scale = raw;
    next.x -= mx * ds;
    next.y -= my * ds;
    next
}

/// Returns the initial state regardless of input.
#[inline]
pub fn reset(_state: GestureState) -> GestureState {
    GestureState::default()
}
