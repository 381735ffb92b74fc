//! The compiled-in star layer stack for the cellular variant.

/// One star-size/density class: a cellular evaluation at `scale`/`cutoff`,
/// tinted by the blackbody color at `kelvin` and weighted by `intensity`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarLayer {
    /// Cell grid frequency. Higher packs more, smaller stars per screen.
    pub scale: f32,
    /// Star radius control passed to the cellular evaluator; closer to 1
    /// means smaller, sharper points.
    pub cutoff: f32,
    /// Color temperature in Kelvin.
    pub kelvin: f32,
    /// Additive weight of this layer.
    pub intensity: f32,
}

/// The fixed seven-layer stack: a few large hot stars down to dense cool
/// dust. Compiled in rather than configurable; the compositor iterates in
/// order and sums.
pub const STAR_LAYERS: [StarLayer; 7] = [
    StarLayer {
        scale: 8.0,
        cutoff: 0.92,
        kelvin: 9500.0,
        intensity: 1.0,
    },
    StarLayer {
        scale: 12.0,
        cutoff: 0.93,
        kelvin: 7200.0,
        intensity: 0.9,
    },
    StarLayer {
        scale: 18.0,
        cutoff: 0.94,
        kelvin: 6000.0,
        intensity: 0.8,
    },
    StarLayer {
        scale: 27.0,
        cutoff: 0.95,
        kelvin: 5200.0,
        intensity: 0.7,
    },
    StarLayer {
        scale: 40.0,
        cutoff: 0.96,
        kelvin: 4400.0,
        intensity: 0.6,
    },
    StarLayer {
        scale: 60.0,
        cutoff: 0.97,
        kelvin: 3400.0,
        intensity: 0.5,
    },
    StarLayer {
        scale: 90.0,
        cutoff: 0.97,
        kelvin: 2800.0,
        intensity: 0.4,
    },
];
