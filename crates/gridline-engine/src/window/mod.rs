//! Window and runtime loop.
//!
//! Owns the `winit` event loop and the single studio window, and wires it to
//! the GPU layer.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
