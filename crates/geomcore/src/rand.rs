//! Random simple polygons (star-shaped radial sampler).
//!
//! Model
//! - Place `n` angles at equal spacing Δ = 2π/n, jitter each by less than
//!   Δ/2 so the sequence stays strictly increasing, and draw a radius in
//!   `[radius_min, radius_max]` per vertex. Monotone angles around the origin
//!   make the polygon star-shaped, hence simple — which is what makes this a
//!   valid input generator for the triangulation property tests.
//! - Determinism: a single `StdRng` seeded from a caller-supplied `u64`.
//!
//! Vertices come out in counterclockwise order (positive shoelace area).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Vec2;

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    /// Vertex count; clamped to at least 3.
    pub vertices: usize,
    /// Inner radius of the sampling band; clamped to a small positive value.
    pub radius_min: f64,
    /// Outer radius of the sampling band.
    pub radius_max: f64,
    /// Angular jitter as a fraction of the base spacing Δ. Clamped to
    /// [0, 0.49] so adjacent angles cannot cross.
    pub angle_jitter_frac: f64,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertices: 12,
            radius_min: 0.5,
            radius_max: 1.5,
            angle_jitter_frac: 0.3,
        }
    }
}

/// Draw a random star-shaped (hence simple) polygon around the origin.
pub fn draw_polygon_star(cfg: StarCfg, seed: u64) -> Vec<Vec2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = cfg.vertices.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let r_lo = cfg.radius_min.max(1e-9);
    let r_hi = cfg.radius_max.max(r_lo);
    let delta = std::f64::consts::TAU / n as f64;
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let angle = k as f64 * delta + jitter;
            let r = if r_hi > r_lo {
                rng.gen_range(r_lo..r_hi)
            } else {
                r_lo
            };
            Vec2::new(angle.cos() * r, angle.sin() * r)
        })
        .collect()
}
