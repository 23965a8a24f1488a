//! Per-vertex attributes and their packing into one vertex buffer.
//!
//! An [`Attribute`] owns raw bytes for one shader input. [`synthesize`] packs a
//! set of attributes back to back into a single buffer and reports, for each
//! one, the [`VertexPointer`] a renderer needs to read it out again, plus the
//! vertex count shared by all of them.

mod attribute;
mod element;
mod synthesis;

pub use attribute::{Attribute, AttributeMeta};
pub use element::ElementType;
pub use synthesis::{synthesize, Synthesis, VertexPointer};
