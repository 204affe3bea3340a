//! GLC Renderer - CPU ray tracing through a generalized linear camera
//!
//! A single-sample diffuse ray tracer whose camera maps screen samples to
//! rays through two reference planes, so one camera type covers pinhole,
//! orthographic and XSlit projections.
//!
//! Window, input and display glue live outside this crate; they drive a
//! [`RenderContext`] once per refresh and consume the finished RGB buffer.

mod camera;
mod config;
mod context;
mod hittable;
pub mod input;
mod renderer;
pub mod sampling;
mod scene;
mod sphere;
mod triangle;

pub use camera::{Camera, CameraCommand, CameraError, CameraModel, CameraResult, PlaneTriple};
pub use config::{CameraConfig, ConfigError, ConfigResult, CustomPlanes, RenderConfig};
pub use context::RenderContext;
pub use hittable::{Color, HitRecord, Hittable, HittableList};
pub use input::OrbitDrag;
pub use renderer::{
    color_to_rgb, render, sky_gradient, trace, CancelToken, ImageBuffer, RenderError,
    RenderResult, RenderSettings, ViewPlane, BOUNCE_ATTENUATION, SHADOW_EPSILON,
};
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export math types from glc_math
pub use glc_math::{Interval, Ray, Vec2, Vec3};
