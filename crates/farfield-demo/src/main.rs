//! Renders the starfield variants to PNG files.
//!
//! Loads (or creates) `farfield.ron`, applies CLI overrides, then renders
//! the selected variant(s) with the parallel frame renderer and writes the
//! frames to the output directory. With `--frames N` the cellular clock
//! advances by `--dt` per frame, producing an animation sequence.

use std::error::Error;
use std::path::Path;

use clap::Parser;
use farfield_config::{CliArgs, Config};
use farfield_log::init_logging;
use farfield_render::{Frame, FrameRenderer};
use farfield_stars::{CellularParams, CellularStarfield, NoiseStarfield, StarfieldParams};
use glam::{Vec2, Vec3};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(dir) => Config::load_or_create(dir)?,
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    init_logging(None, cfg!(debug_assertions), Some(&config));

    let renderer = match config.render.threads {
        0 => FrameRenderer::from_cpus(),
        n => FrameRenderer::new(n),
    };
    let (width, height) = (config.render.width, config.render.height);
    let out_dir = Path::new(&config.render.output_dir);
    std::fs::create_dir_all(out_dir)?;

    if args.variant.includes_noise() {
        info!(width, height, "rendering noise starfield");
        let field = NoiseStarfield::new(noise_params(&config));
        let frame = renderer.render(&field, width, height);
        save_png(&frame, &out_dir.join("starfield_noise.png"))?;
    }

    if args.variant.includes_cellular() {
        for frame_index in 0..args.frames.max(1) {
            let mut params = cellular_params(&config);
            params.time += frame_index as f32 * args.dt;
            info!(frame_index, time = params.time, "rendering cellular starfield");
            let field = CellularStarfield::new(params);
            let frame = renderer.render(&field, width, height);
            let name = if args.frames > 1 {
                format!("starfield_cellular_{frame_index:04}.png")
            } else {
                "starfield_cellular.png".to_string()
            };
            save_png(&frame, &out_dir.join(name))?;
        }
    }

    Ok(())
}

/// Build the noise-path parameter block for one frame from the config.
fn noise_params(config: &Config) -> StarfieldParams {
    let noise = &config.noise;
    StarfieldParams {
        scale: noise.scale,
        ramp_cutoff: noise.ramp_cutoff,
        octaves: noise.octaves,
        lacunarity: noise.lacunarity,
        gain: noise.gain,
        brightness_scale: noise.brightness_scale,
        brightness_octaves: noise.brightness_octaves,
        brightness_lacunarity: noise.brightness_lacunarity,
        brightness_gain: noise.brightness_gain,
        brightness: noise.brightness,
        parallax_factor: noise.parallax_factor,
        camera_position: Vec2::from_array(noise.camera_position),
        resolution: Vec2::new(config.render.width as f32, config.render.height as f32),
    }
}

/// Build the cellular-path parameter block for one frame from the config.
fn cellular_params(config: &Config) -> CellularParams {
    let cellular = &config.cellular;
    CellularParams {
        parallax_factor: cellular.parallax_factor,
        camera_position: Vec3::from_array(cellular.camera_position),
        resolution: Vec3::new(
            config.render.width as f32,
            config.render.height as f32,
            cellular.time_scale,
        ),
        time: cellular.time,
    }
}

/// Encode a frame as PNG at `path`.
fn save_png(frame: &Frame, path: &Path) -> Result<(), Box<dyn Error>> {
    let image = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_rgba8())
        .ok_or("frame buffer does not match its dimensions")?;
    image.save(path)?;
    info!(path = %path.display(), "wrote frame");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_params_mirror_config() {
        let mut config = Config::default();
        config.noise.scale = 9.0;
        config.noise.camera_position = [4.0, -2.0];
        config.render.width = 1024;
        config.render.height = 512;

        let params = noise_params(&config);
        assert_eq!(params.scale, 9.0);
        assert_eq!(params.camera_position, Vec2::new(4.0, -2.0));
        assert_eq!(params.resolution, Vec2::new(1024.0, 512.0));
    }

    #[test]
    fn test_cellular_params_carry_time_scale_in_resolution_z() {
        let mut config = Config::default();
        config.cellular.time_scale = 0.125;
        config.cellular.time = 2.0;

        let params = cellular_params(&config);
        assert_eq!(params.resolution.z, 0.125);
        assert_eq!(params.time, 2.0);
    }

    #[test]
    fn test_save_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let frame = Frame::new(8, 4);
        save_png(&frame, &path).unwrap();
        assert!(path.exists());
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_rendered_frame_round_trips_through_png_size() {
        let frame = FrameRenderer::new(2).render(
            &CellularStarfield::new(CellularParams::default()),
            16,
            16,
        );
        assert_eq!(frame.to_rgba8().len(), 16 * 16 * 4);
    }
}
