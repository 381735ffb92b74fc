//! Multi-octave fractal Brownian motion over simplex noise.

use glam::Vec2;
use noise::{NoiseFn, Simplex};

/// Maximum octave count; higher requests are clamped down.
pub const MAX_OCTAVES: i32 = 8;

/// Per-field fBm configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FbmParams {
    /// Number of octaves to composite. Values at or below 0 produce a zero
    /// field; values above [`MAX_OCTAVES`] are clamped.
    pub octaves: i32,
    /// Frequency multiplier between successive octaves. Sensible fields use
    /// values > 1 so detail gets finer per octave.
    pub lacunarity: f32,
    /// Amplitude multiplier between successive octaves. Sensible fields use
    /// values in (0, 1) so detail gets fainter per octave.
    pub gain: f32,
}

/// Samples normalized fractal noise.
///
/// Octave `i` contributes simplex noise at frequency `lacunarity^i` with
/// amplitude `gain^i`; the sum is divided by the total absolute amplitude,
/// bounding the output to roughly [-1, 1] for any octave count or gain.
pub struct Fbm {
    noise: Simplex,
    octaves: u32,
    lacunarity: f64,
    gain: f64,
}

impl Fbm {
    /// Create a sampler for the given seed.
    pub fn new(seed: u32, params: FbmParams) -> Self {
        Self {
            noise: Simplex::new(seed),
            octaves: params.octaves.clamp(0, MAX_OCTAVES) as u32,
            lacunarity: params.lacunarity as f64,
            gain: params.gain as f64,
        }
    }

    /// Evaluate the field at `p`.
    ///
    /// Returns 0.0 for a zero-octave sampler or a degenerate amplitude sum;
    /// otherwise a finite value in approximately [-1, 1].
    pub fn sample(&self, p: Vec2) -> f32 {
        let mut total = 0.0_f64;
        let mut amp_sum = 0.0_f64;
        let mut frequency = 1.0_f64;
        let mut amplitude = 1.0_f64;

        for _ in 0..self.octaves {
            let nx = p.x as f64 * frequency;
            let ny = p.y as f64 * frequency;
            total += self.noise.get([nx, ny]) * amplitude;
            amp_sum += amplitude.abs();

            frequency *= self.lacunarity;
            amplitude *= self.gain;
        }

        if amp_sum <= f64::EPSILON {
            return 0.0;
        }
        (total / amp_sum) as f32
    }

    /// Number of octaves actually sampled after clamping.
    pub fn octaves(&self) -> u32 {
        self.octaves
    }
}
