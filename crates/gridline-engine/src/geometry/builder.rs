use super::shapes::close;

/// Accumulates closed shapes into one strip-ready coordinate list.
///
/// Equivalent to [`combine`](super::combine), but lets scene code add shapes
/// one at a time and report progress.
///
/// ```rust,ignore
/// let coords = ShapeBuilder::new()
///     .shape(box_outline(0.0, 0.0, 0.5, 0.5, 0.01))
///     .shape(rectangle(0.99, 0.99, 1.01, 1.01))
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShapeBuilder {
    coords: Vec<f32>,
    shapes: usize,
}

impl ShapeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes `shape` and appends it.
    pub fn shape<I>(mut self, shape: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        self.coords.extend(close(shape));
        self.shapes += 1;
        self
    }

    /// Number of shapes added so far.
    pub fn shape_count(&self) -> usize {
        self.shapes
    }

    /// Number of vertices accumulated so far.
    pub fn vertex_count(&self) -> usize {
        self.coords.len() / 2
    }

    pub fn build(self) -> Vec<f32> {
        self.coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{array, box_outline, combine, rectangle, Point};

    #[test]
    fn builder_matches_combine() {
        let grid = array(
            box_outline(0.005, 0.005, 0.015, 0.015, 0.002),
            Point::new(-1.0, -1.0),
            Point::new(0.02, 0.02),
            (3, 3),
        );
        let frame = box_outline(-1.0, -1.0, 1.0, 1.0, 0.002);
        let marker = rectangle(0.99, 0.99, 1.01, 1.01);

        let built = ShapeBuilder::new()
            .shape(grid.clone())
            .shape(frame.clone())
            .shape(marker.clone())
            .build();

        assert_eq!(built, combine([grid, frame, marker]));
    }

    #[test]
    fn builder_counts_shapes_and_vertices() {
        let b = ShapeBuilder::new()
            .shape(rectangle(0.0, 0.0, 1.0, 1.0))
            .shape(box_outline(0.0, 0.0, 1.0, 1.0, 0.1));
        assert_eq!(b.shape_count(), 2);
        // 4 + 2 and 10 + 2 vertices after closing.
        assert_eq!(b.vertex_count(), 18);
    }

    #[test]
    fn empty_builder_builds_nothing() {
        assert!(ShapeBuilder::new().build().is_empty());
    }
}
