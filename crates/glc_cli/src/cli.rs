use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glc_renderer::{CameraModel, RenderConfig};
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Camera presets accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    Pinhole,
    Orthographic,
    Xslit,
}

impl From<ModelArg> for CameraModel {
    fn from(model: ModelArg) -> Self {
        match model {
            ModelArg::Pinhole => CameraModel::Pinhole,
            ModelArg::Orthographic => CameraModel::Orthographic,
            ModelArg::Xslit => CameraModel::XSlit,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "glc-render")]
#[command(about = "Render a scene through a generalized linear camera")]
pub struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output image (format from extension)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Maximum diffuse bounces per ray
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Seed for reproducible frames
    #[arg(long)]
    pub seed: Option<u64>,

    /// Camera preset (replaces any planes from the config file)
    #[arg(short, long, value_enum)]
    pub model: Option<ModelArg>,

    /// Mirror the yaw axis
    #[arg(long)]
    pub reverse_x: bool,

    /// Mirror the pitch axis
    #[arg(long)]
    pub reverse_y: bool,

    /// Yaw in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub yaw: Option<f32>,

    /// Pitch in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub pitch: Option<f32>,

    /// Write rows bottom-up so the saved file is upright
    #[arg(long)]
    pub flip_y: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(width) = self.width {
            config.render.width = width;
        }
        if let Some(height) = self.height {
            config.render.height = height;
        }
        if let Some(max_depth) = self.max_depth {
            config.render.max_depth = max_depth;
        }
        if self.seed.is_some() {
            config.render.seed = self.seed;
        }
        if let Some(model) = self.model {
            config.camera.model = model.into();
            config.camera.planes = None;
        }
        // Flags toggle whatever the config file asked for
        config.camera.reverse_x ^= self.reverse_x;
        config.camera.reverse_y ^= self.reverse_y;
        if let Some(yaw) = self.yaw {
            config.camera.yaw = yaw;
        }
        if let Some(pitch) = self.pitch {
            config.camera.pitch = pitch;
        }
    }
}
