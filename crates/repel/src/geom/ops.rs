//! Point/box operations used by the solver and by leader-line drawing.

use nalgebra::Vector2;

use super::types::Box2;

/// Euclidean distance between two points.
#[inline]
pub fn euclid(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// Geometric center of a box.
#[inline]
pub fn centroid(b: &Box2) -> Vector2<f64> {
    Vector2::new((b.x1 + b.x2) / 2.0, (b.y1 + b.y2) / 2.0)
}

/// Intersect the infinite line through `p1` and `p2` with the boundary of `b`.
///
/// Each of the four sides is tested; of the hits that land within a side's
/// extent, the one closest to `p1` wins. Returns `None` when the line misses
/// the box or when `p1 == p2` (no line).
pub fn intersect_line_rectangle(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    b: &Box2,
) -> Option<Vector2<f64>> {
    let mut best: Option<(Vector2<f64>, f64)> = None;
    let mut consider = |c: Vector2<f64>| {
        let d = euclid(c, p1);
        if best.as_ref().is_none_or(|(_, bd)| d < *bd) {
            best = Some((c, d));
        }
    };

    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if dx == 0.0 && dy == 0.0 {
        return None;
    }

    if dx != 0.0 {
        let slope = dy / dx;
        let intercept = p2.y - p2.x * slope;
        // Left and right sides.
        for x in [b.x1, b.x2] {
            let y = slope * x + intercept;
            if b.y1 <= y && y <= b.y2 {
                consider(Vector2::new(x, y));
            }
        }
        // Bottom and top sides (a horizontal line can only hit left/right).
        if slope != 0.0 {
            for y in [b.y1, b.y2] {
                let x = (y - intercept) / slope;
                if b.x1 <= x && x <= b.x2 {
                    consider(Vector2::new(x, y));
                }
            }
        }
    } else {
        // Vertical line: only the horizontal sides can be crossed.
        let x = p1.x;
        if b.x1 <= x && x <= b.x2 {
            consider(Vector2::new(x, b.y1));
            consider(Vector2::new(x, b.y2));
        }
    }

    best.map(|(c, _)| c)
}
