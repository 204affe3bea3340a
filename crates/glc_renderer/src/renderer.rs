//! Core ray tracing renderer.
//!
//! Implements single-sample diffuse ray tracing with:
//! - Recursive shading with an explicit bounce budget
//! - A vertical sky gradient as the only light source
//! - 8-bit RGB output, no gamma correction

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::sampling::random_unit_vector;
use crate::{Camera, Color, Hittable, Ray};
use glc_math::{Interval, Vec3};
use rand::RngCore;
use serde::Deserialize;
use thiserror::Error;

/// Lower bound of every scene query, suppresses self-intersection at bounce origins.
pub const SHADOW_EPSILON: f32 = 0.01;

/// Flat per-bounce attenuation, multiplied with the surface color.
///
/// Not energy conserving: channels brighter than 1.25 gain energy per bounce.
pub const BOUNCE_ATTENUATION: f32 = 0.8;

/// Errors that can occur while rendering a frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Render cancelled after {completed_rows} rows")]
    Cancelled { completed_rows: u32 },

    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Screen-plane rectangle that pixels are mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewPlane {
    pub lower_left: Vec3,
    pub horizontal: Vec3,
    pub vertical: Vec3,
}

impl ViewPlane {
    /// Bilinear blend: `lower_left + u * horizontal + v * vertical`.
    pub fn sample(&self, u: f32, v: f32) -> Vec3 {
        self.lower_left + u * self.horizontal + v * self.vertical
    }
}

impl Default for ViewPlane {
    fn default() -> Self {
        Self {
            lower_left: Vec3::new(-1.0, -1.0, -1.0),
            horizontal: Vec3::new(2.0, 0.0, 0.0),
            vertical: Vec3::new(0.0, 2.0, 0.0),
        }
    }
}

/// Render settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum number of diffuse bounces per ray
    pub max_depth: u32,
    /// Seed for the sampling generator; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Screen-plane rectangle
    pub view: ViewPlane,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            max_depth: 50,
            seed: None,
            view: ViewPlane::default(),
        }
    }
}

/// Cooperative cancellation flag, checked once per scanline.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Every clone observes it.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Compute the color seen by a ray.
///
/// On a hit the ray bounces in a cosine-weighted direction around the
/// normal and the result is attenuated by `0.8 * surface color`. On a miss,
/// or once `depth` reaches zero, the sky gradient is returned.
pub fn trace(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    // Bounce budget exhausted: no scene query
    if depth == 0 {
        return sky_gradient(ray);
    }

    let Some(rec) = world.hit(ray, Interval::new(SHADOW_EPSILON, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    // target = p + normal + random unit vector
    let mut direction = rec.normal + random_unit_vector(rng);

    // Catch degenerate scatter direction
    if direction.length_squared() < 1e-8 {
        direction = rec.normal;
    }

    let bounced = Ray::new(rec.p, direction);
    BOUNCE_ATTENUATION * rec.color * trace(&bounced, world, depth - 1, rng)
}

/// Compute sky gradient background.
///
/// White at the bottom (`dir.y = -1`), sky blue at the top (`dir.y = 1`).
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Convert a linear color to 8-bit RGB.
///
/// Each channel is clamped to [0, 1] and mapped with `floor(255.99 * c)`.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let channel = |c: f32| (255.99 * Interval::UNIT.clamp(c)) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Tightly packed 8-bit RGB frame, row-major, row `j = 0` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = self.offset(x, y);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    /// Raw bytes, `width * height * 3` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded; pixels are traced in row order with `u = i / width`
/// and `v = j / height`. The cancel token is polled before every row.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
    cancel: &CancelToken,
) -> RenderResult<ImageBuffer> {
    let (width, height) = (settings.width, settings.height);
    let pixel_count = (width as usize).checked_mul(height as usize);
    if width == 0 || height == 0 || pixel_count.and_then(|n| n.checked_mul(3)).is_none() {
        return Err(RenderError::InvalidResolution { width, height });
    }

    log::info!(
        "Rendering {}x{} (max depth {})",
        width,
        height,
        settings.max_depth
    );
    let start = Instant::now();

    let mut image = ImageBuffer::new(width, height);

    for j in 0..height {
        if cancel.is_cancelled() {
            log::warn!("Render cancelled at row {}/{}", j, height);
            return Err(RenderError::Cancelled { completed_rows: j });
        }

        let v = j as f32 / height as f32;
        for i in 0..width {
            let u = i as f32 / width as f32;
            let ray = camera.gen_ray(settings.view.sample(u, v));
            let color = trace(&ray, world, settings.max_depth, rng);
            image.set(i, j, color_to_rgb(color));
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
