//! CPU frame evaluation for per-pixel procedural shaders.
//!
//! The [`Shade`] trait is the seam between a procedural background and the
//! host: one pure invocation per output pixel. [`FrameRenderer`] evaluates
//! any `Shade` over a pixel grid, in parallel across a worker pool, into a
//! [`Frame`] that converts to RGBA8 for encoding or GPU upload.

pub mod frame;
pub mod renderer;

pub use frame::Frame;
pub use renderer::{FrameRenderer, Shade};
