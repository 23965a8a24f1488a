//! Contract between the runtime loop and the application.
//!
//! The runtime owns windows and GPU state; the application sees them only
//! through a per-frame `FrameCtx`.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
