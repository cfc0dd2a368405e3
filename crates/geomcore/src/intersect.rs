//! Intersections of linear objects: line/line in 2D, plane/line in 3D.
//!
//! Both solvers express the query as a small linear system, invert it with
//! [`crate::linalg`], and map the solved parameter back onto the line. A
//! singular system means there is no unique intersection (parallel or
//! coincident inputs) and surfaces as `None` — callers must not read a
//! coordinate out of a failed solve.

use nalgebra::{Matrix2, Matrix3};

use crate::cfg::GeomCfg;
use crate::linalg::{inverse2, inverse3};
use crate::{Vec2, Vec3};

/// Intersection point of the line through `from1`/`to1` with the line through
/// `from2`/`to2`, or `None` when the lines are parallel or coincident.
///
/// Solves `from1 + t·dir1 = from2 + s·dir2` as the 2×2 system with columns
/// `(-dir1, dir2)` and right-hand side `from1 − from2`; the returned point is
/// `from1 + dir1·t`.
pub fn line_line(
    from1: Vec2<f64>,
    to1: Vec2<f64>,
    from2: Vec2<f64>,
    to2: Vec2<f64>,
    cfg: GeomCfg,
) -> Option<Vec2<f64>> {
    let dir1 = to1 - from1;
    let dir2 = to2 - from2;
    let m = Matrix2::new(-dir1.x, dir2.x, -dir1.y, dir2.y);
    let inv = inverse2(&m, cfg)?;
    let res = inv * (from1 - from2);
    Some(from1 + dir1 * res.x)
}

/// Intersection point of the plane through `origin`, `p`, `q` with the line
/// through `from`/`to`, or `None` when the line is parallel to the plane (or
/// the three plane points are collinear).
///
/// `p` and `q` are further points on the plane, not direction vectors: the
/// system `origin + a·(p−origin) + b·(q−origin) = from + c·dir` is solved in
/// the equivalent form with columns `(origin−p, origin−q, dir)` and
/// right-hand side `origin − from`; the returned point is `from + dir·c`
/// with `c` the third solved parameter.
pub fn plane_line(
    origin: Vec3<f64>,
    p: Vec3<f64>,
    q: Vec3<f64>,
    from: Vec3<f64>,
    to: Vec3<f64>,
    cfg: GeomCfg,
) -> Option<Vec3<f64>> {
    let dir = to - from;
    let m = Matrix3::new(
        origin.x - p.x,
        origin.x - q.x,
        dir.x,
        origin.y - p.y,
        origin.y - q.y,
        dir.y,
        origin.z - p.z,
        origin.z - q.z,
        dir.z,
    );
    let inv = inverse3(&m, cfg)?;
    let res = inv * (origin - from);
    Some(from + dir * res.z)
}
