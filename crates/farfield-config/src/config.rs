//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level renderer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Frame output settings.
    pub render: RenderConfig,
    /// Fractal-noise starfield tuning.
    pub noise: NoiseFieldConfig,
    /// Cellular starfield tuning.
    pub cellular: CellularFieldConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Frame output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Worker thread count (0 = derive from CPU count).
    pub threads: usize,
    /// Directory rendered frames are written to.
    pub output_dir: String,
}

/// Tuning for the fractal-noise starfield, mirroring its per-frame
/// parameter block field for field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NoiseFieldConfig {
    /// Spatial frequency of the density field.
    pub scale: f32,
    /// Soft threshold for the density ramp, in [0, 1).
    pub ramp_cutoff: f32,
    /// Octave count for the density field.
    pub octaves: i32,
    /// Per-octave frequency multiplier for the density field.
    pub lacunarity: f32,
    /// Per-octave amplitude multiplier for the density field.
    pub gain: f32,
    /// Spatial frequency of the brightness field.
    pub brightness_scale: f32,
    /// Octave count for the brightness field.
    pub brightness_octaves: i32,
    /// Per-octave frequency multiplier for the brightness field.
    pub brightness_lacunarity: f32,
    /// Per-octave amplitude multiplier for the brightness field.
    pub brightness_gain: f32,
    /// Scalar multiplier on the final color.
    pub brightness: f32,
    /// How strongly the field shifts with camera movement.
    pub parallax_factor: f32,
    /// Camera position in world units.
    pub camera_position: [f32; 2],
}

/// Tuning for the cellular starfield.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CellularFieldConfig {
    /// How strongly the field shifts with camera movement.
    pub parallax_factor: f32,
    /// Camera position; `z` scales the time-driven flash term.
    pub camera_position: [f32; 3],
    /// Flash time-scale channel (resolution `z`).
    pub time_scale: f32,
    /// Clock value for the first rendered frame, in seconds.
    pub time: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            threads: 0,
            output_dir: "frames".to_string(),
        }
    }
}

impl Default for NoiseFieldConfig {
    fn default() -> Self {
        Self {
            scale: 5.0,
            ramp_cutoff: 0.6,
            octaves: 3,
            lacunarity: 2.1,
            gain: 0.5,
            brightness_scale: 30.0,
            brightness_octaves: 1,
            brightness_lacunarity: 2.5,
            brightness_gain: 1.0,
            brightness: 0.3,
            parallax_factor: 0.05,
            camera_position: [0.0, 0.0],
        }
    }
}

impl Default for CellularFieldConfig {
    fn default() -> Self {
        Self {
            parallax_factor: 0.02,
            camera_position: [0.0, 0.0, 0.0],
            time_scale: 0.0,
            time: 0.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("farfield.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `farfield.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join("farfield.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::Write)?;
        Ok(())
    }
}
