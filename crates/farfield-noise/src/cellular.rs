//! Cellular (nearest-site Worley) star evaluation.

use glam::Vec2;

use crate::hash::cell_jitter;
use crate::scalar::smoothstep;

/// Evaluate the cellular star field at `p`.
///
/// The plane is divided into unit cells at `scale`; every cell owns one
/// star site jittered off its center by a hash of the cell id. The result
/// is `smoothstep(cutoff, 1, 1 - d)` of the distance to the nearest site
/// over the 3x3 neighborhood: exactly 1.0 on a site, falling to 0 away from
/// it, with `cutoff` controlling the apparent star radius.
pub fn stars(p: Vec2, scale: f32, cutoff: f32) -> f32 {
    let scaled = p * scale;
    let base = scaled.floor();
    let frac = scaled - base;
    let cell_x = base.x as i32;
    let cell_y = base.y as i32;

    let mut min_dist = f32::MAX;
    for dy in -1..=1_i32 {
        for dx in -1..=1_i32 {
            let (jx, jy) = cell_jitter(cell_x + dx, cell_y + dy);
            // Site in this cell's frame: neighbor offset + cell center + jitter.
            let delta_x = dx as f32 + 0.5 + jx - frac.x;
            let delta_y = dy as f32 + 0.5 + jy - frac.y;
            let dist = libm::sqrtf(delta_x * delta_x + delta_y * delta_y);
            min_dist = min_dist.min(dist);
        }
    }

    smoothstep(cutoff, 1.0, 1.0 - min_dist)
}

/// World-space position of the star site owned by cell `(cx, cy)` at `scale`.
///
/// `stars` evaluates to exactly 1.0 at this point. Exposed so callers and
/// tests can locate star centers without re-deriving the jitter convention.
pub fn star_site(cx: i32, cy: i32, scale: f32) -> Vec2 {
    let (jx, jy) = cell_jitter(cx, cy);
    Vec2::new(cx as f32 + 0.5 + jx, cy as f32 + 0.5 + jy) / scale
}
