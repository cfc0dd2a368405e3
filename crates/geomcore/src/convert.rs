//! Named conversions between integer and floating-point vectors.
//!
//! The float→int direction truncates toward zero (Rust `as` semantics);
//! callers who want rounding should round before converting. Keeping these as
//! named functions (rather than `From` impls on type aliases) makes the lossy
//! direction visible at every call site.

use crate::{Vec2, Vec2I, Vec3, Vec3I};

/// Widen an integer 2D vector to `f64` coordinates (exact).
#[inline]
pub fn vec2_to_f64(v: Vec2I) -> Vec2<f64> {
    Vec2::new(v.x as f64, v.y as f64)
}

/// Narrow a 2D vector to integer coordinates, truncating toward zero.
#[inline]
pub fn vec2_to_i32(v: Vec2<f64>) -> Vec2I {
    Vec2I::new(v.x as i32, v.y as i32)
}

/// Widen an integer 3D vector to `f64` coordinates (exact).
#[inline]
pub fn vec3_to_f64(v: Vec3I) -> Vec3<f64> {
    Vec3::new(v.x as f64, v.y as f64, v.z as f64)
}

/// Narrow a 3D vector to integer coordinates, truncating toward zero.
#[inline]
pub fn vec3_to_i32(v: Vec3<f64>) -> Vec3I {
    Vec3I::new(v.x as i32, v.y as i32, v.z as i32)
}
