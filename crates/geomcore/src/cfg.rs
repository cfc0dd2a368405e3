//! Tolerance configuration for degeneracy and singularity checks.
//!
//! Policy
//! - The default is exact equality (`eps = 0.0`): a determinant or doubled
//!   signed area fails its check only when it is exactly zero. This preserves
//!   the legacy numerical behavior of the routines this crate replaces.
//! - [`GeomCfg::strict`] is the documented tolerant mode for callers that
//!   prefer to treat near-singular systems as singular rather than divide by
//!   a tiny value.

/// Geometry configuration (tolerances).
///
/// Magnitudes `<= eps` count as zero. With the default (`0.0`), only exact
/// zeros are rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Singularity threshold for determinants in [`crate::linalg`] and the
    /// intersection solvers.
    pub eps_det: f64,
    /// Degeneracy threshold for doubled signed areas in the containment and
    /// ear tests.
    pub eps_area: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 0.0,
            eps_area: 0.0,
        }
    }
}

impl GeomCfg {
    /// Tolerant mode: near-zero determinants/areas are treated as zero.
    #[inline]
    pub fn strict() -> Self {
        Self {
            eps_det: 1e-12,
            eps_area: 1e-12,
        }
    }
}
