//! Procedural parallax starfield backgrounds.
//!
//! Two per-pixel renderer variants share a parallax coordinate transform:
//! [`NoiseStarfield`] layers two fractal noise fields (density and
//! brightness) into a soft nebula-like sky, while [`CellularStarfield`]
//! sums seven cellular point-star layers tinted by blackbody color
//! temperature. Both are built once per frame from an immutable parameter
//! block and evaluate as pure functions of the pixel coordinate.

pub mod blackbody;
pub mod cellular_field;
pub mod layers;
pub mod noise_field;
pub mod parallax;
pub mod params;
pub mod seed;

pub use blackbody::blackbody;
pub use cellular_field::CellularStarfield;
pub use layers::{STAR_LAYERS, StarLayer};
pub use noise_field::NoiseStarfield;
pub use parallax::parallax;
pub use params::{CellularParams, CellularUniform, StarfieldParams, StarfieldUniform};
pub use seed::{SeedMode, field_seed, multiplicative_seed};
