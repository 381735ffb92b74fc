//! Configuration system for the farfield renderer.
//!
//! Runtime-tunable settings that persist to disk as RON files, with CLI
//! overrides via clap. The config mirrors the per-frame parameter blocks so
//! a scene can be tuned without recompiling, while the compiled-in star
//! layer stack stays fixed.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, Variant};
pub use config::{CellularFieldConfig, Config, DebugConfig, NoiseFieldConfig, RenderConfig};
pub use error::ConfigError;
