use std::time::Instant;

use gridline_engine::coords::Vec2;
use gridline_engine::geometry::{array, box_outline, rectangle, ShapeBuilder};

use crate::config::GridConfig;

/// Builds the demo scene: the box grid, three framing outlines and a marker
/// square at the top-right corner.
pub fn build(grid: &GridConfig) -> Vec<f32> {
    let started = Instant::now();
    let (x1, y1, x2, y2, border) = grid.cell;

    let builder = ShapeBuilder::new()
        .shape(array(
            box_outline(x1, y1, x2, y2, border),
            grid.origin,
            grid.step,
            grid.repetitions,
        ))
        .shape(box_outline(0.0, 0.0, 0.5, 0.5, 0.01))
        .shape(box_outline(0.0, 0.0, -0.9, -0.9, 0.01))
        .shape(box_outline(-1.0, -1.0, 1.0, 1.0, 0.002))
        .shape(rectangle(0.99, 0.99, 1.01, 1.01));

    log::info!(
        "vertex generator ready: {} vertices in {} shapes ({:.1?})",
        builder.vertex_count(),
        builder.shape_count(),
        started.elapsed()
    );
    builder.build()
}

/// Offset and scale of the orbit animation at `phase`.
pub fn orbit(phase: f64) -> (Vec2, f32) {
    let offset = Vec2::new(
        (phase.sin() + 0.2 * (phase * 10.0).cos()) as f32,
        (phase.cos() + 0.2 * (phase * 10.0).sin()) as f32,
    );
    let scale = (3.0 * (phase * 6.0).sin() + 3.1) as f32;
    (offset, scale)
}
