//! Named shader uniforms with per-type validation.
//!
//! A [`Uniform`] holds one typed value. Values go through a single
//! normalization step keyed on [`UniformKind`]: inputs are flattened, cut to
//! the kind's arity and checked for NaN before anything visible changes.
//! A [`UniformStore`] keeps a program's uniforms in declaration order.

mod input;
mod kind;
mod store;
mod uniform;

pub use input::{flatten, UniformInput};
pub use kind::{UniformKind, UniformValue};
pub use store::UniformStore;
pub use uniform::Uniform;
