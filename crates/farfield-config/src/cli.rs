//! Command-line argument parsing for the farfield renderer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::Config;

/// Which starfield variant(s) to render.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Soft fractal-noise starfield only.
    Noise,
    /// Crisp cellular starfield only.
    Cellular,
    /// Render both variants.
    Both,
}

impl Variant {
    /// Whether the noise variant should be rendered.
    pub fn includes_noise(self) -> bool {
        matches!(self, Variant::Noise | Variant::Both)
    }

    /// Whether the cellular variant should be rendered.
    pub fn includes_cellular(self) -> bool {
        matches!(self, Variant::Cellular | Variant::Both)
    }
}

/// Farfield command-line arguments.
///
/// CLI values override settings loaded from `farfield.ron`.
#[derive(Parser, Debug)]
#[command(name = "farfield", about = "Procedural parallax starfield renderer")]
pub struct CliArgs {
    /// Frame width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Frame height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Worker thread count (0 = derive from CPU count).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Which variant(s) to render.
    #[arg(long, value_enum, default_value_t = Variant::Both)]
    pub variant: Variant,

    /// Number of frames to render (the cellular clock advances per frame).
    #[arg(long, default_value_t = 1)]
    pub frames: u32,

    /// Seconds the clock advances per frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Output directory for rendered frames.
    #[arg(long)]
    pub output: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.render.width = w;
        }
        if let Some(h) = args.height {
            self.render.height = h;
        }
        if let Some(threads) = args.threads {
            self.render.threads = threads;
        }
        if let Some(ref output) = args.output {
            self.render.output_dir = output.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
