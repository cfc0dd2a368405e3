//! Planar/spatial geometry core: containment, triangulation, small solves.
//!
//! Purpose
//! - Answer three questions about shapes: does a point lie inside a region
//!   (triangle/polygon), how does a simple polygon decompose into triangles,
//!   and where do two linear objects (line/line in 2D, plane/line in 3D)
//!   intersect.
//! - Everything is a pure function over caller-supplied values; no component
//!   holds state across calls, so concurrent use only needs ordinary value
//!   aliasing discipline.
//!
//! Numerical policy
//! - Degeneracy and singularity checks go through [`cfg::GeomCfg`]. The
//!   default is exact-equality (`eps = 0.0`), matching the legacy behavior of
//!   the routines this crate replaces; [`cfg::GeomCfg::strict`] is the
//!   documented tolerant mode. Degenerate inputs are reported (as `false`,
//!   `None`, or an error), never propagated as NaN.
//!
//! Scaling
//! - [`triangulate::triangulate`] is O(n²) in the vertex count. Fine for the
//!   modest polygons this crate targets; callers on a hard-deadline path
//!   should bound polygon size upstream.

pub mod cfg;
pub mod contain;
pub mod convert;
pub mod intersect;
pub mod linalg;
pub mod rand;
pub mod triangulate;
pub mod util;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Short vector aliases used across the crate.
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Integer-coordinate 2D vector.
pub type Vec2I = nalgebra::Vector2<i32>;
/// Integer-coordinate 3D vector.
pub type Vec3I = nalgebra::Vector3<i32>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::GeomCfg;
    pub use crate::contain::{point_in_polygon, point_in_triangle};
    pub use crate::convert::{vec2_to_f64, vec2_to_i32, vec3_to_f64, vec3_to_i32};
    pub use crate::intersect::{line_line, plane_line};
    pub use crate::linalg::{det2, det3, det4, inverse2, inverse3, inverse4};
    pub use crate::rand::{draw_polygon_star, StarCfg};
    pub use crate::triangulate::{
        polygon_area, triangulate, triangulate_indices, triangulate_int, TriangulateError,
    };
    pub use crate::util::{bounds, bounds_int};
    pub use crate::{Vec2, Vec2I, Vec3, Vec3I};
}
