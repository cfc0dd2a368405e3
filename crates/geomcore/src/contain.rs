//! Containment predicates: point-in-triangle and point-in-polygon.
//!
//! Conventions
//! - [`point_in_triangle`] is boundary-exclusive: points on an edge or vertex
//!   report `false`. Degenerate (collinear) triangles contain nothing.
//! - [`point_in_polygon`] is a ray-parity test with explicit rules for
//!   horizontal edges and edge endpoints; those rules decide the axis-aligned
//!   edge cases and are part of the contract, not an implementation detail.

use crate::cfg::GeomCfg;
use crate::Vec2;

/// Whether `p` lies strictly inside triangle `(t1, t2, t3)`.
///
/// Computes the barycentric weights of `p` via the determinant-ratio formula
/// and requires `a > 0 && b > 0 && 1 - a - b > 0`. The shared denominator is
/// the triangle's doubled signed area; magnitudes `<= cfg.eps_area` reject
/// the triangle as degenerate instead of dividing.
pub fn point_in_triangle(p: Vec2<f64>, t1: Vec2<f64>, t2: Vec2<f64>, t3: Vec2<f64>, cfg: GeomCfg) -> bool {
    let denom = (t2.y - t3.y) * (t1.x - t3.x) + (t3.x - t2.x) * (t1.y - t3.y);
    if denom.abs() <= cfg.eps_area {
        return false;
    }
    let a = ((t2.y - t3.y) * (p.x - t3.x) + (t3.x - t2.x) * (p.y - t3.y)) / denom;
    let b = ((t3.y - t1.y) * (p.x - t3.x) + (t1.x - t3.x) * (p.y - t3.y)) / denom;
    a > 0.0 && b > 0.0 && 1.0 - a - b > 0.0
}

/// Whether `p` lies in the closed triangle `(t1, t2, t3)`, boundary included.
///
/// Sign test on the three edge cross products — no division, so the only
/// degenerate case is a collinear triangle, which contains nothing (same
/// policy as [`point_in_triangle`]). The ear sweep uses this variant: a
/// vertex sitting exactly on a candidate's edge must block the ear even
/// though the strict predicate reports it outside.
pub fn point_in_triangle_inclusive(
    p: Vec2<f64>,
    t1: Vec2<f64>,
    t2: Vec2<f64>,
    t3: Vec2<f64>,
    cfg: GeomCfg,
) -> bool {
    let area2 = (t2.x - t1.x) * (t3.y - t1.y) - (t2.y - t1.y) * (t3.x - t1.x);
    if area2.abs() <= cfg.eps_area {
        return false;
    }
    let d1 = (t2.x - t1.x) * (p.y - t1.y) - (t2.y - t1.y) * (p.x - t1.x);
    let d2 = (t3.x - t2.x) * (p.y - t2.y) - (t3.y - t2.y) * (p.x - t2.x);
    let d3 = (t1.x - t3.x) * (p.y - t3.y) - (t1.y - t3.y) * (p.x - t3.x);
    if area2 > 0.0 {
        d1 >= 0.0 && d2 >= 0.0 && d3 >= 0.0
    } else {
        d1 <= 0.0 && d2 <= 0.0 && d3 <= 0.0
    }
}

/// Whether `point` lies inside the polygon given by `poly` (closing edge from
/// the last vertex back to the first included).
///
/// Ray-parity test: every edge contributes +1 (non-crossing) or -1
/// (crossing); the point is inside iff the product over all edges is
/// negative, i.e. the crossing count is odd. Fewer than 3 vertices: `false`.
///
/// Edge rules (these fix the axis-aligned cases):
/// - horizontal edge at the query point's y: crossing iff `point.x` lies in
///   `[min(x1,x2), max(x1,x2)]` — a point on such an edge counts as inside;
/// - otherwise, with the edge oriented so `y1 <= y2`: non-crossing when
///   `point.y <= y1 || point.y >= y2`, else decided by the sign of the
///   cross product `(x1-px)(y2-py) - (y1-py)(x2-px)` (negative ⇒ crossing).
pub fn point_in_polygon(point: Vec2<f64>, poly: &[Vec2<f64>]) -> bool {
    if poly.len() < 3 {
        return false;
    }
    let last = poly[poly.len() - 1];
    let mut parity = edge_parity(point, last.x, last.y, poly[0].x, poly[0].y);
    for w in poly.windows(2) {
        parity *= edge_parity(point, w[0].x, w[0].y, w[1].x, w[1].y);
    }
    parity < 0
}

/// Parity contribution of one edge: -1 crossing, +1 non-crossing.
fn edge_parity(point: Vec2<f64>, x1: f64, y1: f64, x2: f64, y2: f64) -> i32 {
    if point.y == y1 && y1 == y2 {
        // Horizontal edge at the query's y: crossing iff x lies on the edge.
        if (x1 <= point.x && point.x <= x2) || (x2 <= point.x && point.x <= x1) {
            return -1;
        }
        return 1;
    }
    // Orient the edge upward.
    let (x1, y1, x2, y2) = if y1 > y2 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };
    if point.y <= y1 || point.y >= y2 {
        return 1;
    }
    let delta = (x1 - point.x) * (y2 - point.y) - (y1 - point.y) * (x2 - point.x);
    if delta < 0.0 {
        -1
    } else {
        1
    }
}
