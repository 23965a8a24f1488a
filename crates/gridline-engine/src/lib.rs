//! Gridline engine crate.
//!
//! Scene-side building blocks (`geometry`, `attribute`, `uniform`, `gesture`)
//! are plain CPU code. They reach the GPU only through
//! [`render::DrawSurface`], implemented on wgpu by [`render::StripRenderer`]
//! and driven by the winit runtime in `window`.

pub mod error;

pub mod attribute;
pub mod coords;
pub mod geometry;
pub mod gesture;
pub mod uniform;

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;

pub use error::{Error, Result};
