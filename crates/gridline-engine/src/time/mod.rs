//! Time subsystem.
//!
//! - one `FrameClock` per window; `tick()` once per presented frame
//! - `Animation` advances a phase from frame deltas and stops cooperatively

mod animation;
mod frame_clock;

pub use animation::{Animation, StopSignal};
pub use frame_clock::{FrameClock, FrameTime};
