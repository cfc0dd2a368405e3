//! Sample a random simple polygon, triangulate it, and sanity-check areas.
//!
//! Usage:
//!   cargo run -p geomcore --example tessellate -- [vertices] [seed]

use geomcore::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let n: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(16)
        .max(3);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let poly = draw_polygon_star(
        StarCfg {
            vertices: n,
            ..StarCfg::default()
        },
        seed,
    );
    let tris = triangulate(&poly, GeomCfg::default()).expect("star polygons are simple");

    let tri_sum: f64 = tris
        .iter()
        .map(|t| {
            ((t[1].x - t[0].x) * (t[2].y - t[0].y) - (t[1].y - t[0].y) * (t[2].x - t[0].x)).abs()
                * 0.5
        })
        .sum();
    let shoelace = polygon_area(&poly).abs();

    println!("polygon: n={n} seed={seed}");
    println!("triangles: {} (expected {})", tris.len(), n - 2);
    println!("area: triangles={tri_sum:.6} shoelace={shoelace:.6}");

    let centroid = poly.iter().sum::<Vec2<f64>>() / poly.len() as f64;
    println!(
        "centroid {:?} inside: {}",
        (centroid.x, centroid.y),
        point_in_polygon(centroid, &poly)
    );
}
