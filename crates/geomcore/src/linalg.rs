//! Closed-form inverses for small dense matrices (orders 2, 3, 4).
//!
//! Purpose
//! - Back the intersection solvers with cofactor/adjugate inversion whose
//!   singularity policy is explicit: `None` iff `|det| <= cfg.eps_det`, and
//!   on failure nothing is produced (no partially-computed matrix).
//!
//! Why not `nalgebra::try_inverse`
//! - The configurable epsilon (default: exact zero, the legacy policy) is
//!   part of this crate's contract; nalgebra's decomposition thresholds are
//!   not, and would silently change which systems count as singular.

use nalgebra::{Matrix2, Matrix3, Matrix4};

use crate::cfg::GeomCfg;

/// Determinant of a 2×2 matrix.
#[inline]
pub fn det2(m: &Matrix2<f64>) -> f64 {
    m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
}

/// Determinant of a 3×3 matrix (cofactor expansion along the first row).
#[inline]
pub fn det3(m: &Matrix3<f64>) -> f64 {
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}

/// Determinant of a 4×4 matrix (cofactor expansion along the first row).
pub fn det4(m: &Matrix4<f64>) -> f64 {
    let mut det = 0.0;
    for c in 0..4 {
        det += m[(0, c)] * cofactor4(m, 0, c);
    }
    det
}

/// Inverse of a 2×2 matrix, or `None` if `|det| <= cfg.eps_det`.
pub fn inverse2(m: &Matrix2<f64>, cfg: GeomCfg) -> Option<Matrix2<f64>> {
    let det = det2(m);
    if det.abs() <= cfg.eps_det {
        return None;
    }
    let inv_det = 1.0 / det;
    Some(Matrix2::new(
        m[(1, 1)] * inv_det,
        -m[(0, 1)] * inv_det,
        -m[(1, 0)] * inv_det,
        m[(0, 0)] * inv_det,
    ))
}

/// Inverse of a 3×3 matrix via the adjugate, or `None` if singular.
pub fn inverse3(m: &Matrix3<f64>, cfg: GeomCfg) -> Option<Matrix3<f64>> {
    let det = det3(m);
    if det.abs() <= cfg.eps_det {
        return None;
    }
    let inv_det = 1.0 / det;
    let mut out = Matrix3::zeros();
    for r in 0..3 {
        for c in 0..3 {
            // Adjugate: transposed cofactor matrix.
            out[(c, r)] = cofactor3(m, r, c) * inv_det;
        }
    }
    Some(out)
}

/// Inverse of a 4×4 matrix via the adjugate, or `None` if singular.
pub fn inverse4(m: &Matrix4<f64>, cfg: GeomCfg) -> Option<Matrix4<f64>> {
    let det = det4(m);
    if det.abs() <= cfg.eps_det {
        return None;
    }
    let inv_det = 1.0 / det;
    let mut out = Matrix4::zeros();
    for r in 0..4 {
        for c in 0..4 {
            out[(c, r)] = cofactor4(m, r, c) * inv_det;
        }
    }
    Some(out)
}

/// Indices 0..3 with `k` removed.
#[inline]
fn others3(k: usize) -> [usize; 2] {
    match k {
        0 => [1, 2],
        1 => [0, 2],
        _ => [0, 1],
    }
}

/// Indices 0..4 with `k` removed.
#[inline]
fn others4(k: usize) -> [usize; 3] {
    match k {
        0 => [1, 2, 3],
        1 => [0, 2, 3],
        2 => [0, 1, 3],
        _ => [0, 1, 2],
    }
}

/// Signed cofactor of entry `(r, c)` of a 3×3 matrix.
#[inline]
fn cofactor3(m: &Matrix3<f64>, r: usize, c: usize) -> f64 {
    let rows = others3(r);
    let cols = others3(c);
    let minor = m[(rows[0], cols[0])] * m[(rows[1], cols[1])]
        - m[(rows[0], cols[1])] * m[(rows[1], cols[0])];
    if (r + c) % 2 == 0 {
        minor
    } else {
        -minor
    }
}

/// Signed cofactor of entry `(r, c)` of a 4×4 matrix.
fn cofactor4(m: &Matrix4<f64>, r: usize, c: usize) -> f64 {
    let rows = others4(r);
    let cols = others4(c);
    let sub = Matrix3::from_fn(|i, j| m[(rows[i], cols[j])]);
    let minor = det3(&sub);
    if (r + c) % 2 == 0 {
        minor
    } else {
        -minor
    }
}
