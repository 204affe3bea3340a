//! JSON render configuration.
//!
//! ```json
//! {
//!   "render": { "width": 512, "height": 512, "max_depth": 50, "seed": 7 },
//!   "camera": { "model": "xslit", "reverse_x": true, "yaw": 15.0 },
//!   "scene":  { "spheres": [ { "center": [0, 0, -4], "radius": 0.5, "color": [1, 1, 1] } ] }
//! }
//! ```
//!
//! Every section is optional. A missing scene means the demo scene.

use std::path::Path;

use crate::input::{clamp_pitch, wrap_yaw};
use crate::{Camera, CameraError, CameraModel, PlaneTriple, RenderSettings, Scene};
use glc_math::Vec2;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Camera error: {0}")]
    Camera(#[from] CameraError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Explicit plane pair, overriding the model preset.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CustomPlanes {
    pub uv: PlaneTriple,
    pub st: PlaneTriple,
}

/// Camera section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub model: CameraModel,
    pub planes: Option<CustomPlanes>,
    /// Toggle the yaw-axis reversal once after construction
    pub reverse_x: bool,
    /// Toggle the pitch-axis reversal once after construction
    pub reverse_y: bool,
    /// Degrees, wrapped into (-180, 180]
    pub yaw: f32,
    /// Degrees, clamped to [-90, 90]
    pub pitch: f32,
}

impl CameraConfig {
    /// Build the camera this section describes.
    pub fn build(&self) -> Result<Camera, CameraError> {
        let mut camera = match self.planes {
            Some(planes) => Camera::new(planes.uv, planes.st)?,
            None => Camera::from_model(self.model),
        };

        if self.reverse_x {
            camera.reverse_x();
        }
        if self.reverse_y {
            camera.reverse_y();
        }
        camera.set_orientation(Vec2::new(wrap_yaw(self.yaw), clamp_pitch(self.pitch)));

        Ok(camera)
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub render: RenderSettings,
    pub camera: CameraConfig,
    pub scene: Option<Scene>,
}

impl RenderConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Build the configured camera.
    pub fn build_camera(&self) -> ConfigResult<Camera> {
        Ok(self.camera.build()?)
    }

    /// The configured scene, or the demo scene if none was given.
    pub fn scene(&self) -> Scene {
        self.scene.clone().unwrap_or_else(Scene::demo)
    }
}
