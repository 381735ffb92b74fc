//! Parallax coordinate transform shared by both renderer variants.

use glam::Vec2;

/// Transform a normalized screen coordinate into a generator sampling
/// coordinate.
///
/// Centers the coordinate on the screen, offsets it by the camera position
/// scaled by the parallax factor (Y flipped: screen Y grows downward, world
/// Y grows upward), then stretches X by the aspect ratio so circular stars
/// stay round on non-square targets. Resolution components are clamped to
/// one pixel so a degenerate resolution cannot divide by zero.
pub fn parallax(uv: Vec2, camera: Vec2, parallax_factor: f32, resolution: Vec2) -> Vec2 {
    let mut p = uv - 0.5;
    p += camera * Vec2::new(1.0, -1.0) * parallax_factor;
    let res = resolution.max(Vec2::ONE);
    p.x *= res.x / res.y;
    p
}
