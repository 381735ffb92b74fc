//! The fractal-noise starfield variant.

use farfield_noise::{Fbm, FbmParams, ramp};
use farfield_render::Shade;
use glam::Vec2;

use crate::parallax::parallax;
use crate::params::StarfieldParams;
use crate::seed::{SeedMode, field_seed};

/// Soft starfield: a ramped density field multiplied by an independent
/// brightness field.
///
/// Density decides where stars appear; the brightness field, sampled at its
/// own scale with its own octave set, decides how bright they are. Keeping
/// the fields independent avoids correlated bright-and-dense artifacts.
/// Built once per frame from a [`StarfieldParams`] block; `shade` is pure
/// and thread-safe.
pub struct NoiseStarfield {
    params: StarfieldParams,
    density: Fbm,
    brightness: Fbm,
}

impl NoiseStarfield {
    /// Build the per-frame evaluator with the default seed mode.
    pub fn new(params: StarfieldParams) -> Self {
        Self::with_seed_mode(params, SeedMode::default())
    }

    /// Build with an explicit seed derivation mode.
    pub fn with_seed_mode(params: StarfieldParams, mode: SeedMode) -> Self {
        let seed = field_seed(&params, mode);
        log::debug!("noise starfield seed {seed:#010x} ({mode:?})");
        let density = Fbm::new(
            seed,
            FbmParams {
                octaves: params.octaves,
                lacunarity: params.lacunarity,
                gain: params.gain,
            },
        );
        let brightness = Fbm::new(
            seed,
            FbmParams {
                octaves: params.brightness_octaves,
                lacunarity: params.brightness_lacunarity,
                gain: params.brightness_gain,
            },
        );
        Self {
            params,
            density,
            brightness,
        }
    }

    /// The parameter block this evaluator was built from.
    pub fn params(&self) -> &StarfieldParams {
        &self.params
    }
}

impl Shade for NoiseStarfield {
    fn shade(&self, uv: Vec2) -> [f32; 4] {
        let p = parallax(
            uv,
            self.params.camera_position,
            self.params.parallax_factor,
            self.params.resolution,
        );

        // Where stars appear.
        let d = self.density.sample(p * self.params.scale);
        let t = ramp(d, self.params.ramp_cutoff);

        // How bright they are, decoupled from placement.
        let d2 = self.brightness.sample(p * self.params.brightness_scale);

        let value = (t * d2 * self.params.brightness).clamp(0.0, 1.0);
        [value, value, value, t.clamp(0.0, 1.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_reference_scene_is_deterministic_and_finite() {
        // The end-to-end reference block: defaults are exactly this scene.
        let field = NoiseStarfield::new(StarfieldParams::default());
        let first = field.shade(Vec2::splat(0.5));
        for &v in &first {
            assert!(v.is_finite(), "reference pixel has non-finite channel {v}");
            assert!((0.0..=1.0).contains(&v), "channel {v} out of range");
        }
        // Re-evaluation and an independently built field agree bit-exactly.
        assert_eq!(first, field.shade(Vec2::splat(0.5)));
        let rebuilt = NoiseStarfield::new(StarfieldParams::default());
        assert_eq!(first, rebuilt.shade(Vec2::splat(0.5)));
    }

    #[test]
    fn test_output_clamped_over_random_coords() {
        let field = NoiseStarfield::new(StarfieldParams {
            brightness: 10.0, // deliberately hot
            ..Default::default()
        });
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..1000 {
            let uv = Vec2::new(rng.random(), rng.random());
            let c = field.shade(uv);
            for &v in &c {
                assert!((0.0..=1.0).contains(&v), "channel {v} at {uv}");
            }
        }
    }

    #[test]
    fn test_cutoff_re_phases_field_via_seed() {
        // ramp_cutoff participates in the multiplicative seed, so changing
        // it re-rolls the field's phase; the monotonicity guarantee applies
        // to the ramp with a fixed noise input, not across re-seeded
        // evaluators. Pin the coupling down so it is not "fixed" silently.
        let a = field_seed(
            &StarfieldParams {
                ramp_cutoff: 0.2,
                ..Default::default()
            },
            SeedMode::Multiplicative,
        );
        let b = field_seed(
            &StarfieldParams {
                ramp_cutoff: 0.6,
                ..Default::default()
            },
            SeedMode::Multiplicative,
        );
        assert_ne!(a, b, "cutoff change must perturb the multiplicative seed");
    }

    #[test]
    fn test_zero_parallax_matches_moved_camera() {
        let still = NoiseStarfield::new(StarfieldParams::default());
        let moved = NoiseStarfield::new(StarfieldParams {
            camera_position: Vec2::new(40.0, -7.0),
            parallax_factor: 0.0,
            ..Default::default()
        });
        let uv = Vec2::new(0.25, 0.75);
        assert_eq!(still.shade(uv), moved.shade(uv));
    }

    #[test]
    fn test_parallax_shifts_the_field() {
        let a = NoiseStarfield::new(StarfieldParams {
            parallax_factor: 0.1,
            ..Default::default()
        });
        let b = NoiseStarfield::new(StarfieldParams {
            parallax_factor: 0.1,
            camera_position: Vec2::new(5.0, 0.0),
            ..Default::default()
        });
        // Camera (5, 0) at factor 0.1 shifts the centered coordinate by
        // +0.5 before aspect correction, so the moved camera at screen
        // center sees what the still camera sees at the right edge.
        let ca = a.shade(Vec2::new(1.0, 0.5));
        let cb = b.shade(Vec2::new(0.5, 0.5));
        for ch in 0..4 {
            assert!(
                (ca[ch] - cb[ch]).abs() < 1e-4,
                "channel {ch}: {} vs {}",
                ca[ch],
                cb[ch]
            );
        }
    }

    #[test]
    fn test_degenerate_params_never_panic() {
        let field = NoiseStarfield::new(StarfieldParams {
            octaves: 0,
            brightness_octaves: -5,
            lacunarity: 0.0,
            gain: 7.0,
            ramp_cutoff: 1.0,
            resolution: Vec2::ZERO,
            ..Default::default()
        });
        let c = field.shade(Vec2::new(0.1, 0.9));
        for &v in &c {
            assert!(v.is_finite());
        }
    }
}
