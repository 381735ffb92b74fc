//! Procedural noise primitives for the farfield starfield renderers.
//!
//! Two generator families live here: multi-octave simplex fBm ([`Fbm`]) for
//! soft density and brightness fields, and a single-nearest-site cellular
//! evaluator ([`stars`]) for crisp point stars. Every function is a pure
//! function of its inputs with no global state, so evaluations are safe to
//! run concurrently across any number of threads.

pub mod cellular;
pub mod fbm;
pub mod hash;
pub mod scalar;

pub use cellular::{star_site, stars};
pub use fbm::{Fbm, FbmParams, MAX_OCTAVES};
pub use hash::{cell_jitter, hash_2d};
pub use scalar::{fade, lerp, ramp, smoothstep};
