use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use glc_renderer::{CancelToken, ImageBuffer, RenderConfig, RenderContext};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    log::info!("Starting GLC renderer");

    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    args.apply_overrides(&mut config);

    let camera = config
        .build_camera()
        .context("Invalid camera configuration")?;
    let scene = config.scene();
    log::info!(
        "Camera model {}, scene with {} primitives",
        config.camera.model,
        scene.len()
    );

    let mut context = RenderContext::new(camera, config.render.clone());
    let image = context.render_frame(&scene.hittables(), &CancelToken::new())?;

    save_image(&image, &args.output, args.flip_y)?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}

/// Persist the RGB buffer; the format follows the file extension.
fn save_image(image: &ImageBuffer, path: &Path, flip_y: bool) -> Result<()> {
    let mut rgb = image::RgbImage::from_raw(image.width, image.height, image.as_bytes().to_vec())
        .context("Frame buffer does not match its dimensions")?;

    if flip_y {
        image::imageops::flip_vertical_in_place(&mut rgb);
    }

    rgb.save(path)
        .with_context(|| format!("Failed to save {}", path.display()))?;
    Ok(())
}
