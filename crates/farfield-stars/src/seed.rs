//! Shared noise seed derivation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::params::StarfieldParams;

/// How the seed shared by the density and brightness fields is derived
/// from the parameter block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// Multiply all ten tuning fields together, coupling every parameter
    /// into the phase of both fields so tuning any one of them re-rolls
    /// the whole sky. The default: existing scenes depend on it.
    ///
    /// Known fragility: a single zero field collapses the product to zero,
    /// which loses the decorrelation between parameter sets. Kept as-is so
    /// saved scenes keep rendering identically; use [`SeedMode::Mixed`]
    /// for new scenes that need robust seeding.
    #[default]
    Multiplicative,
    /// SipHash the bit patterns of the same ten fields. Robust to zero
    /// fields while remaining fully deterministic.
    Mixed,
}

/// The documented multiplicative seed: the product of all ten tuning
/// fields (density and brightness alike).
///
/// Camera position and parallax factor are deliberately excluded — folding
/// them in would re-scramble the field every frame the camera moves.
pub fn multiplicative_seed(params: &StarfieldParams) -> f32 {
    params.scale
        * params.ramp_cutoff
        * params.octaves as f32
        * params.lacunarity
        * params.gain
        * params.brightness_scale
        * params.brightness_octaves as f32
        * params.brightness_lacunarity
        * params.brightness_gain
        * params.brightness
}

/// Derive the 32-bit generator seed for a parameter block.
pub fn field_seed(params: &StarfieldParams, mode: SeedMode) -> u32 {
    match mode {
        SeedMode::Multiplicative => multiplicative_seed(params).to_bits(),
        SeedMode::Mixed => {
            let mut hasher = DefaultHasher::new();
            params.scale.to_bits().hash(&mut hasher);
            params.ramp_cutoff.to_bits().hash(&mut hasher);
            params.octaves.hash(&mut hasher);
            params.lacunarity.to_bits().hash(&mut hasher);
            params.gain.to_bits().hash(&mut hasher);
            params.brightness_scale.to_bits().hash(&mut hasher);
            params.brightness_octaves.hash(&mut hasher);
            params.brightness_lacunarity.to_bits().hash(&mut hasher);
            params.brightness_gain.to_bits().hash(&mut hasher);
            params.brightness.to_bits().hash(&mut hasher);
            hasher.finish() as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_multiplicative_seed_is_field_product() {
        let params = StarfieldParams {
            scale: 2.0,
            ramp_cutoff: 0.5,
            octaves: 4,
            lacunarity: 2.0,
            gain: 0.5,
            brightness_scale: 10.0,
            brightness_octaves: 2,
            brightness_lacunarity: 3.0,
            brightness_gain: 0.25,
            brightness: 1.0,
            ..Default::default()
        };
        // 2 * 0.5 * 4 * 2 * 0.5 * 10 * 2 * 3 * 0.25 * 1
        assert_eq!(multiplicative_seed(&params), 60.0);
    }

    #[test]
    fn test_multiplicative_zero_collapse() {
        // The documented fragility: one zero field zeroes the whole seed.
        let a = StarfieldParams {
            ramp_cutoff: 0.0,
            scale: 5.0,
            ..Default::default()
        };
        let b = StarfieldParams {
            ramp_cutoff: 0.0,
            scale: 999.0,
            ..Default::default()
        };
        assert_eq!(multiplicative_seed(&a), 0.0);
        assert_eq!(field_seed(&a, SeedMode::Multiplicative), field_seed(&b, SeedMode::Multiplicative));
    }

    #[test]
    fn test_mixed_mode_survives_zero_fields() {
        let a = StarfieldParams {
            ramp_cutoff: 0.0,
            scale: 5.0,
            ..Default::default()
        };
        let b = StarfieldParams {
            ramp_cutoff: 0.0,
            scale: 999.0,
            ..Default::default()
        };
        assert_ne!(field_seed(&a, SeedMode::Mixed), field_seed(&b, SeedMode::Mixed));
    }

    #[test]
    fn test_seed_ignores_camera_and_parallax() {
        let base = StarfieldParams::default();
        let moved = StarfieldParams {
            camera_position: Vec2::new(123.0, -45.0),
            parallax_factor: 0.7,
            ..base.clone()
        };
        for mode in [SeedMode::Multiplicative, SeedMode::Mixed] {
            assert_eq!(
                field_seed(&base, mode),
                field_seed(&moved, mode),
                "camera movement must not re-seed the field in {mode:?}"
            );
        }
    }

    #[test]
    fn test_any_tuning_field_perturbs_mixed_seed() {
        let base = StarfieldParams::default();
        let tweaked = StarfieldParams {
            gain: base.gain + 0.01,
            ..base.clone()
        };
        assert_ne!(
            field_seed(&base, SeedMode::Mixed),
            field_seed(&tweaked, SeedMode::Mixed)
        );
    }
}
