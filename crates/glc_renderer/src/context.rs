//! Render context owned by the frame driver.
//!
//! Holds the camera, the render settings and the sampling generator.
//! Camera changes go through `&mut self` methods, so none can happen while
//! [`RenderContext::render_frame`] is running.

use crate::{
    render, Camera, CameraCommand, CameraResult, CancelToken, Hittable, ImageBuffer, PlaneTriple,
    RenderResult, RenderSettings,
};
use glc_math::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Camera, settings and RNG for a rendering session.
pub struct RenderContext {
    camera: Camera,
    settings: RenderSettings,
    rng: StdRng,
    frames_rendered: u64,
}

impl RenderContext {
    /// Create a context. A seeded context renders reproducible frames.
    pub fn new(camera: Camera, settings: RenderSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            camera,
            settings,
            rng,
            frames_rendered: 0,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Number of frames completed so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Apply a menu command to the camera.
    pub fn apply(&mut self, command: CameraCommand) -> CameraResult<()> {
        log::debug!("Camera command: {:?}", command);
        self.camera.apply(command)
    }

    /// Overwrite yaw (x) and pitch (y), in degrees.
    pub fn set_orientation(&mut self, orientation: Vec2) {
        self.camera.set_orientation(orientation);
    }

    /// Replace the camera planes.
    pub fn reset_camera(&mut self, plane_uv: PlaneTriple, plane_st: PlaneTriple) -> CameraResult<()> {
        self.camera.reset(plane_uv, plane_st)
    }

    /// Change the output resolution for subsequent frames.
    pub fn set_resolution(&mut self, width: u32, height: u32) {
        self.settings.width = width;
        self.settings.height = height;
    }

    /// Render one frame of `world` with the current camera.
    pub fn render_frame(
        &mut self,
        world: &dyn Hittable,
        cancel: &CancelToken,
    ) -> RenderResult<ImageBuffer> {
        let image = render(&self.camera, world, &self.settings, &mut self.rng, cancel)?;
        self.frames_rendered += 1;
        Ok(image)
    }
}
