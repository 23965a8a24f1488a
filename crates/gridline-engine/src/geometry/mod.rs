//! Triangle-strip geometry generators.
//!
//! Shapes are flat coordinate lists (`x, y, x, y, …`) in scene units, ready to
//! be assigned to a two-component float attribute. Generators are eager; every
//! shape in the scene is small and finite.
//!
//! Separate shapes sharing one strip must be closed (see [`close`]) so the
//! strip does not bridge them with a visible triangle.

mod builder;
mod shapes;

pub use builder::ShapeBuilder;
pub use shapes::{array, box_outline, close, combine, points, rectangle};

/// A vertex position in scene units.
pub type Point = crate::coords::Vec2;
