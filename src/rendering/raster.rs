//! Fill primitives: axis-aligned rects, barycentric triangles, outlines

use super::canvas::{Canvas, Color};

/// Oriented edge function: on which side of the directed line `a -> b` the
/// point `p` lies (zero exactly on the line).
fn edge(a: (i32, i32), b: (i32, i32), p: (i32, i32)) -> i64 {
    let (ax, ay) = (a.0 as i64, a.1 as i64);
    let (bx, by) = (b.0 as i64, b.1 as i64);
    let (px, py) = (p.0 as i64, p.1 as i64);
    (px - ax) * (by - ay) - (py - ay) * (bx - ax)
}

/// Fill the half-open box `(x0, y0)-(x1, y1)` with `color`.
///
/// Each coordinate is clamped to the canvas independently before painting; a
/// box that is empty or inverted after clamping is a no-op.
pub fn fill_rect(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let n = canvas.size() as i32;
    let x0 = x0.clamp(0, n);
    let x1 = x1.clamp(0, n);
    let y0 = y0.clamp(0, n);
    let y1 = y1.clamp(0, n);
    for y in y0..y1 {
        for x in x0..x1 {
            canvas.set(x, y, color);
        }
    }
}

/// Fill the triangle `p0 p1 p2` with `color`.
///
/// Every pixel of the bounding box (clamped to the canvas) is tested against
/// the three oriented edges; it is inside when all three edge values are
/// simultaneously >= 0 or simultaneously <= 0, which accepts both windings.
/// Zero counts as inside, so pixels exactly on an edge are painted and two
/// triangles sharing an edge leave no seam between them. Collinear vertices
/// degenerate to a thin or empty fill.
pub fn fill_triangle(
    canvas: &mut Canvas,
    p0: (i32, i32),
    p1: (i32, i32),
    p2: (i32, i32),
    color: Color,
) {
    let n = canvas.size() as i32;
    let min_x = p0.0.min(p1.0).min(p2.0).max(0);
    let max_x = p0.0.max(p1.0).max(p2.0).min(n - 1);
    let min_y = p0.1.min(p1.1).min(p2.1).max(0);
    let max_y = p0.1.max(p1.1).max(p2.1).min(n - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = (x, y);
            let w0 = edge(p1, p2, p);
            let w1 = edge(p2, p0, p);
            let w2 = edge(p0, p1, p);
            if (w0 >= 0 && w1 >= 0 && w2 >= 0) || (w0 <= 0 && w1 <= 0 && w2 <= 0) {
                canvas.set(x, y, color);
            }
        }
    }
}

/// Draw a rectangular frame of band width `thickness` just inside the box
/// `(x0, y0)-(x1, y1)`.
///
/// Four rect fills, one per side. Corners are covered twice, and a thickness
/// of half the box or more fills it completely; both are fine for flat
/// colors.
pub fn fill_outline(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
    thickness: i32,
) {
    fill_rect(canvas, x0, y0, x1, y0 + thickness, color);
    fill_rect(canvas, x0, y1 - thickness, x1, y1, color);
    fill_rect(canvas, x0, y0, x0 + thickness, y1, color);
    fill_rect(canvas, x1 - thickness, y0, x1, y1, color);
}
