//! The cellular starfield variant: seven additive point-star layers.

use farfield_noise::stars;
use farfield_render::Shade;
use glam::Vec2;

use crate::blackbody::blackbody;
use crate::layers::STAR_LAYERS;
use crate::parallax::parallax;
use crate::params::CellularParams;

/// Crisp starfield: the seven [`STAR_LAYERS`] evaluated at one transformed
/// coordinate, each tinted by its blackbody color, summed additively over a
/// time-driven flash floor.
pub struct CellularStarfield {
    params: CellularParams,
    /// Blackbody tint per layer, resolved once at construction.
    layer_colors: [[f32; 3]; STAR_LAYERS.len()],
}

impl CellularStarfield {
    /// Build the per-frame evaluator from a parameter block.
    pub fn new(params: CellularParams) -> Self {
        let mut layer_colors = [[0.0; 3]; STAR_LAYERS.len()];
        for (color, layer) in layer_colors.iter_mut().zip(STAR_LAYERS.iter()) {
            *color = blackbody(layer.kelvin);
        }
        Self {
            params,
            layer_colors,
        }
    }

    /// The parameter block this evaluator was built from.
    pub fn params(&self) -> &CellularParams {
        &self.params
    }
}

impl Shade for CellularStarfield {
    fn shade(&self, uv: Vec2) -> [f32; 4] {
        let p = parallax(
            uv,
            self.params.camera_position.truncate(),
            self.params.parallax_factor,
            self.params.resolution.truncate(),
        );

        // Ambient flash floor driven by the external clock and the spare
        // vector channels, applied before any star contribution.
        let flash = self.params.time * self.params.camera_position.z * self.params.resolution.z;
        let mut rgb = [flash; 3];

        for (layer, color) in STAR_LAYERS.iter().zip(self.layer_colors.iter()) {
            let s = stars(p, layer.scale, layer.cutoff) * layer.intensity;
            rgb[0] += color[0] * s;
            rgb[1] += color[1] * s;
            rgb[2] += color[2] * s;
        }

        [
            rgb[0].clamp(0.0, 1.0),
            rgb[1].clamp(0.0, 1.0),
            rgb[2].clamp(0.0, 1.0),
            1.0,
        ]
    }
}
