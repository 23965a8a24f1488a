//! Wheel gesture to pan/zoom transform.
//!
//! State is a pan offset plus an unbounded raw scale. The raw scale is mapped
//! through [`normalize_scale`] to the always-positive factor the shader uses:
//!
//! ```text
//! ndc = (position + offset) * scale
//! ```
//!
//! Zooming adjusts the offset so the scene point under the cursor stays put.

mod scale;
mod state;
mod wheel;

pub use scale::{normalize_scale, FINE_ZOOM_DIVISOR, ZOOM_DIVISOR};
pub use state::{ndc_to_screen, reset, screen_to_ndc, update, GestureState};
pub use wheel::{WheelGesture, LINE_HEIGHT, WHEEL_DELTA_PER_LINE};
