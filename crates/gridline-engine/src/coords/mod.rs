//! Coordinate types shared by geometry, gesture math and renderers.
//!
//! Scene space:
//! - normalized device coordinates, nominally [-1, 1] on both axes
//! - origin at the center, +X right, +Y up
//!
//! Values may leave [-1, 1]; clipping happens on the GPU.
//! Surface sizes (`Viewport`) stay in logical pixels.

mod color;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use vec2::Vec2;
pub use viewport::Viewport;
