use super::Point;

/// Filled quad as four strip vertices: (x1,y1), (x2,y1), (x1,y2), (x2,y2).
///
/// The result is not closed.
pub fn rectangle(x1: f32, y1: f32, x2: f32, y2: f32) -> Vec<f32> {
    vec![
        x1, y1, //
        x2, y1, //
        x1, y2, //
        x2, y2,
    ]
}

/// Hollow frame of stroke width `w` around the rectangle (x1,y1)-(x2,y2).
///
/// Emits 10 vertices as inner/outer corner pairs, walking the bottom, right,
/// top and left edges and ending on the starting pair again, so the frame is
/// already closed on its own.
///
/// ```text
///          (x1, y2)    (x2, y2)
///             ┌──────────*
///             │          │
///             *──────────┘
///          (x1, y1)    (x2, y1)
/// ```
///
/// Corner order of the input does not matter; `w == 0` yields a zero-area frame.
pub fn box_outline(x1: f32, y1: f32, x2: f32, y2: f32, w: f32) -> Vec<f32> {
    let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
    let (y1, y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };

    // Offset from the line center to either border.
    let d = w / 2.0;

    // A: outer corner, B: inner corner.
    let (x1a, x1b) = (x1 - d, x1 + d);
    let (y1a, y1b) = (y1 - d, y1 + d);
    let (x2a, x2b) = (x2 + d, x2 - d);
    let (y2a, y2b) = (y2 + d, y2 - d);

    vec![
        // start
        x1b, y1b, x1a, y1a, //
        // bottom
        x2b, y1b, x2a, y1a, //
        // right
        x2b, y2b, x2a, y2a, //
        // top
        x1b, y2b, x1a, y2a, //
        // left
        x1b, y1b, x1a, y1a,
    ]
}

/// Brackets a shape with degenerate vertices so it can share a strip with
/// its neighbors.
///
/// The first (x, y) pair is emitted twice, and after the shape ends its LAST
/// pair is emitted once more. Together with the next shape's doubled first
/// pair, every triangle spanning the seam has zero area. Despite the name
/// this does not loop back to the first vertex at the end.
///
/// An empty shape yields `[0, 0]`. For an odd-length input the trailing
/// coordinate replaces the buffered x.
pub fn close<I>(shape: I) -> Vec<f32>
where
    I: IntoIterator<Item = f32>,
{
    let iter = shape.into_iter();
    let mut out = Vec::with_capacity(iter.size_hint().0 + 4);
    let mut last = [0.0f32; 2];

    for (i, v) in iter.enumerate() {
        last[i & 1] = v;
        out.push(v);
        if i == 1 {
            out.extend_from_slice(&last);
        }
    }

    out.extend_from_slice(&last);
    out
}

/// Tiles `close(shape)` over a `repetitions.0 × repetitions.1` grid.
///
/// Cell `(i, j)` is offset by `origin + (step.x·i, step.y·j)`; the x offset is
/// added to even indices and the y offset to odd ones. Iteration is
/// `i` outer, `j` inner. A zero count on either axis yields nothing.
pub fn array<I>(shape: I, origin: Point, step: Point, repetitions: (usize, usize)) -> Vec<f32>
where
    I: IntoIterator<Item = f32>,
{
    let base = close(shape);
    let (nx, ny) = repetitions;
    let mut out = Vec::with_capacity(base.len() * nx * ny);

    for i in 0..nx {
        for j in 0..ny {
            let cell = origin + step.scale_by(i as f32, j as f32);
            let offset = [cell.x, cell.y];
            out.extend(base.iter().enumerate().map(|(f, v)| v + offset[f & 1]));
        }
    }

    out
}

/// Concatenates independently closed shapes in argument order.
pub fn combine<S, I>(shapes: S) -> Vec<f32>
where
    S: IntoIterator<Item = I>,
    I: IntoIterator<Item = f32>,
{
    let mut out = Vec::new();
    for shape in shapes {
        out.extend(close(shape));
    }
    out
}

/// Views a flat coordinate list as points. A trailing odd coordinate is ignored.
pub fn points(coords: &[f32]) -> impl Iterator<Item = Point> + '_ {
    coords.chunks_exact(2).map(|c| Point::new(c[0], c[1]))
}
