//! Small helpers over vertex collections.

use crate::{Vec2, Vec2I};

/// Component-wise (min, max) corners of a vertex collection, or `None` for an
/// empty slice.
pub fn bounds(pts: &[Vec2<f64>]) -> Option<(Vec2<f64>, Vec2<f64>)> {
    let mut it = pts.iter();
    let first = *it.next()?;
    let mut min = first;
    let mut max = first;
    for p in it {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

/// Integer-coordinate variant of [`bounds`].
pub fn bounds_int(pts: &[Vec2I]) -> Option<(Vec2I, Vec2I)> {
    let mut it = pts.iter();
    let first = *it.next()?;
    let mut min = first;
    let mut max = first;
    for p in it {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}
