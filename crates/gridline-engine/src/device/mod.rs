//! GPU device and surface management.
//!
//! - `Gpu` creates the wgpu adapter/device/queue and configures the window surface
//! - `begin_frame` / `submit` bracket one presented frame
//! - surface errors map to a `SurfaceErrorAction` for the frame loop

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::GpuInit;
