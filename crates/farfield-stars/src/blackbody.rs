//! Blackbody color temperature mapping.

/// Convert a blackbody temperature in Kelvin to an approximate linear RGB
/// color on the Planckian locus (Tanner Helland's curve fit).
///
/// Below 6600 K red saturates and green follows a log curve of the
/// temperature; above 6600 K red and green decay along power laws. Blue is
/// zero below 1900 K, follows a log curve up to 6600 K, and saturates
/// above. Channels are computed on the 0-255 byte scale the fit was
/// derived for, then clamped and normalized to [0, 1].
pub fn blackbody(kelvin: f32) -> [f32; 3] {
    let t = kelvin / 100.0;

    let r = if t <= 66.0 {
        255.0
    } else {
        329.698_73 * (t - 60.0).powf(-0.133_204_76)
    };

    let g = if t <= 66.0 {
        99.470_8 * t.ln() - 161.119_57
    } else {
        288.122_17 * (t - 60.0).powf(-0.075_514_85)
    };

    let b = if t >= 66.0 {
        255.0
    } else if t <= 19.0 {
        0.0
    } else {
        138.517_73 * (t - 10.0).ln() - 305.044_8
    };

    [
        r.clamp(0.0, 255.0) / 255.0,
        g.clamp(0.0, 255.0) / 255.0,
        b.clamp(0.0, 255.0) / 255.0,
    ]
}
