//! GPU rendering subsystem.
//!
//! Attribute and uniform code talks to the GPU only through [`DrawSurface`].
//! [`StripRenderer`] is the wgpu implementation: it owns its pipeline and
//! buffers and records one pass per frame into a [`RenderTarget`].
//!
//! Convention: vertex positions are scene units; the shader maps them to NDC
//! with the `ratio`, `offset` and `scale` uniforms.

mod ctx;
mod draw;
mod program;
mod strip;
mod surface;

pub use ctx::{RenderCtx, RenderTarget};
pub use draw::StripProgram;
pub use program::{ProgramLayout, UniformBlockLayout, UniformField};
pub use strip::StripRenderer;
pub use surface::{AttributeLocation, DrawSurface, Topology, UniformLocation};

#[cfg(test)]
pub(crate) use surface::testing;
