//! Per-frame parameter blocks for the two starfield variants.
//!
//! A parameter block is supplied once per frame by the host and stays
//! immutable while that frame's pixels are evaluated. The `*Uniform` types
//! mirror the blocks into `#[repr(C)]` plain-old-data layouts a host engine
//! can upload directly.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Parameters for the fractal-noise starfield.
///
/// The first five fields shape the density noise (where stars appear), the
/// `brightness_*` quartet shapes the independent brightness noise (how
/// bright they are), and `brightness` scales the final color.
#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldParams {
    /// Spatial frequency of the density field.
    pub scale: f32,
    /// Soft threshold for the density ramp, in [0, 1).
    pub ramp_cutoff: f32,
    /// Octave count for the density field (clamped to [0, 8]).
    pub octaves: i32,
    /// Per-octave frequency multiplier for the density field (> 1).
    pub lacunarity: f32,
    /// Per-octave amplitude multiplier for the density field, in (0, 1).
    pub gain: f32,

    /// Spatial frequency of the brightness field.
    pub brightness_scale: f32,
    /// Octave count for the brightness field (clamped to [0, 8]).
    pub brightness_octaves: i32,
    /// Per-octave frequency multiplier for the brightness field.
    pub brightness_lacunarity: f32,
    /// Per-octave amplitude multiplier for the brightness field.
    pub brightness_gain: f32,

    /// Scalar multiplier on the final output color.
    pub brightness: f32,

    /// How strongly the field shifts with camera movement.
    pub parallax_factor: f32,
    /// Camera position in world units.
    pub camera_position: Vec2,
    /// Render target size in pixels.
    pub resolution: Vec2,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            scale: 5.0,
            ramp_cutoff: 0.0,
            octaves: 3,
            lacunarity: 2.1,
            gain: 0.5,
            brightness_scale: 30.0,
            brightness_octaves: 1,
            brightness_lacunarity: 2.5,
            brightness_gain: 1.0,
            brightness: 0.3,
            parallax_factor: 0.0,
            camera_position: Vec2::ZERO,
            resolution: Vec2::new(800.0, 600.0),
        }
    }
}

/// Parameters for the cellular starfield.
#[derive(Clone, Debug, PartialEq)]
pub struct CellularParams {
    /// How strongly the field shifts with camera movement.
    pub parallax_factor: f32,
    /// Camera position; `z` scales the time-driven flash term.
    pub camera_position: Vec3,
    /// Render target size in pixels; `z` is the flash time-scale channel.
    pub resolution: Vec3,
    /// External clock in seconds.
    pub time: f32,
}

impl Default for CellularParams {
    fn default() -> Self {
        Self {
            parallax_factor: 1.0,
            camera_position: Vec3::ZERO,
            resolution: Vec3::new(800.0, 600.0, 0.0),
            time: 0.0,
        }
    }
}

/// Fixed-layout mirror of [`StarfieldParams`] for uniform upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct StarfieldUniform {
    pub scale: f32,
    pub ramp_cutoff: f32,
    pub octaves: i32,
    pub lacunarity: f32,
    pub gain: f32,
    pub brightness_scale: f32,
    pub brightness_octaves: i32,
    pub brightness_lacunarity: f32,
    pub brightness_gain: f32,
    pub brightness: f32,
    pub parallax_factor: f32,
    pub camera_position: [f32; 2],
    pub resolution: [f32; 2],
}

impl From<&StarfieldParams> for StarfieldUniform {
    fn from(p: &StarfieldParams) -> Self {
        Self {
            scale: p.scale,
            ramp_cutoff: p.ramp_cutoff,
            octaves: p.octaves,
            lacunarity: p.lacunarity,
            gain: p.gain,
            brightness_scale: p.brightness_scale,
            brightness_octaves: p.brightness_octaves,
            brightness_lacunarity: p.brightness_lacunarity,
            brightness_gain: p.brightness_gain,
            brightness: p.brightness,
            parallax_factor: p.parallax_factor,
            camera_position: p.camera_position.to_array(),
            resolution: p.resolution.to_array(),
        }
    }
}

/// Fixed-layout mirror of [`CellularParams`] for uniform upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CellularUniform {
    pub parallax_factor: f32,
    pub camera_position: [f32; 3],
    pub resolution: [f32; 3],
    pub time: f32,
}

impl From<&CellularParams> for CellularUniform {
    fn from(p: &CellularParams) -> Self {
        Self {
            parallax_factor: p.parallax_factor,
            camera_position: p.camera_position.to_array(),
            resolution: p.resolution.to_array(),
            time: p.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<StarfieldUniform>(), 15 * 4);
        assert_eq!(std::mem::size_of::<CellularUniform>(), 8 * 4);
    }

    #[test]
    fn test_uniform_mirrors_params() {
        let params = StarfieldParams {
            camera_position: Vec2::new(3.0, -2.0),
            ..Default::default()
        };
        let uniform = StarfieldUniform::from(&params);
        assert_eq!(uniform.scale, params.scale);
        assert_eq!(uniform.octaves, params.octaves);
        assert_eq!(uniform.camera_position, [3.0, -2.0]);
        assert_eq!(uniform.resolution, [800.0, 600.0]);
    }

    #[test]
    fn test_cellular_uniform_mirrors_params() {
        let params = CellularParams {
            camera_position: Vec3::new(1.0, 2.0, 3.0),
            time: 9.5,
            ..Default::default()
        };
        let uniform = CellularUniform::from(&params);
        assert_eq!(uniform.camera_position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.time, 9.5);
    }

    #[test]
    fn test_default_block_matches_reference_scene() {
        let p = StarfieldParams::default();
        assert_eq!(p.octaves, 3);
        assert_eq!(p.brightness_octaves, 1);
        assert_eq!(p.resolution, Vec2::new(800.0, 600.0));
    }
}
