//! Generalized linear camera (GLC) for ray generation.
//!
//! A GLC is described by two reference planes, each given by three points.
//! A screen sample is re-expressed as a weighted combination of the ST
//! points; the same weights applied to the UV points give the ray origin,
//! and the ray runs from there towards the sample. Choosing the planes
//! selects the projection: pinhole, orthographic or two-slit (XSlit).
//!
//! On top of the plane mapping the camera carries a yaw/pitch orientation
//! and a pair of reversal flags that mirror each rotation axis.

use std::fmt;

use crate::Ray;
use glc_math::{Mat3, Mat4, Mat4Ext, Vec2, Vec3};
use serde::Deserialize;
use thiserror::Error;

/// Relative tolerance for collinear plane points and singular plane bases.
///
/// Both tests compare against the lengths of the vectors involved, so a
/// plane is accepted or rejected independently of its scale.
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Errors raised when configuring a camera.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("{plane} plane points are collinear and do not span a plane")]
    DegenerateBasis { plane: &'static str },

    #[error("ST plane basis is singular (determinant {det})")]
    SingularBasis { det: f32 },
}

pub type CameraResult<T> = Result<T, CameraError>;

/// Three points spanning a reference plane.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PlaneTriple {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl PlaneTriple {
    /// Create a plane from three points.
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// The points packed as matrix columns, so `M * w = w.x*a + w.y*b + w.z*c`.
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_cols(self.a, self.b, self.c)
    }

    /// True if the three points are (nearly) collinear.
    ///
    /// The sine of the angle between the two edges is compared against the
    /// tolerance; coincident points always count as degenerate.
    pub fn is_degenerate(&self) -> bool {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        !(ab.cross(ac).length() > DEGENERATE_EPSILON * ab.length() * ac.length())
    }
}

/// The canonical plane-pair presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraModel {
    #[default]
    Pinhole,
    Orthographic,
    XSlit,
}

impl CameraModel {
    /// The `(plane_uv, plane_st)` pair for this model.
    pub fn planes(self) -> (PlaneTriple, PlaneTriple) {
        let uv_unit = PlaneTriple::new(Vec3::ZERO, Vec3::Y, Vec3::X);
        let st_front = PlaneTriple::new(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
        );

        match self {
            CameraModel::Pinhole => (
                PlaneTriple::new(Vec3::ZERO, Vec3::new(0.0, 0.2, 0.0), Vec3::new(0.2, 0.0, 0.0)),
                st_front,
            ),
            CameraModel::Orthographic => (uv_unit, st_front),
            CameraModel::XSlit => (
                uv_unit,
                PlaneTriple::new(
                    Vec3::new(1.0, 0.0, -1.0),
                    Vec3::new(0.0, 0.0, -1.0),
                    Vec3::new(0.0, 1.0, -1.0),
                ),
            ),
        }
    }
}

impl fmt::Display for CameraModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraModel::Pinhole => write!(f, "pinhole"),
            CameraModel::Orthographic => write!(f, "orthographic"),
            CameraModel::XSlit => write!(f, "xslit"),
        }
    }
}

/// Configuration commands issued between frames (menu entries).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    /// Switch to a preset; resets the orientation.
    SetModel(CameraModel),
    /// Mirror the yaw axis.
    ReverseX,
    /// Mirror the pitch axis.
    ReverseY,
}

/// Generalized linear camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    plane_uv: PlaneTriple,
    plane_st: PlaneTriple,

    /// x = yaw, y = pitch (degrees)
    orientation: Vec2,
    /// Per-axis multipliers, each +1 or -1
    reversal: Vec2,

    // Cached M_uv * inverse(M_st), set whenever the planes change
    uv_from_screen: Mat3,
}

impl Camera {
    /// Create a camera from two reference planes.
    ///
    /// Fails if either triple is collinear or the ST basis cannot be inverted.
    pub fn new(plane_uv: PlaneTriple, plane_st: PlaneTriple) -> CameraResult<Self> {
        let uv_from_screen = plane_mapping(&plane_uv, &plane_st)?;
        Ok(Self {
            plane_uv,
            plane_st,
            orientation: Vec2::ZERO,
            reversal: Vec2::new(-1.0, -1.0),
            uv_from_screen,
        })
    }

    /// Create a camera from one of the presets.
    pub fn from_model(model: CameraModel) -> Self {
        let (plane_uv, plane_st) = model.planes();
        // Preset bases are known to be valid (covered by tests)
        Self {
            plane_uv,
            plane_st,
            orientation: Vec2::ZERO,
            reversal: Vec2::new(-1.0, -1.0),
            uv_from_screen: plane_uv.to_mat3() * plane_st.to_mat3().inverse(),
        }
    }

    /// Replace both planes and zero the orientation.
    ///
    /// Reversal flags persist. On error the camera is left untouched.
    pub fn reset(&mut self, plane_uv: PlaneTriple, plane_st: PlaneTriple) -> CameraResult<()> {
        self.uv_from_screen = plane_mapping(&plane_uv, &plane_st)?;
        self.plane_uv = plane_uv;
        self.plane_st = plane_st;
        self.orientation = Vec2::ZERO;
        log::debug!("Camera reset: uv={:?} st={:?}", plane_uv, plane_st);
        Ok(())
    }

    /// Reset to a preset.
    pub fn set_model(&mut self, model: CameraModel) -> CameraResult<()> {
        let (plane_uv, plane_st) = model.planes();
        self.reset(plane_uv, plane_st)?;
        log::debug!("Camera model set to {}", model);
        Ok(())
    }

    /// Overwrite yaw (x) and pitch (y), in degrees.
    pub fn set_orientation(&mut self, orientation: Vec2) {
        self.orientation = orientation;
    }

    /// Flip the yaw-axis reversal multiplier.
    pub fn reverse_x(&mut self) {
        self.reversal.x *= -1.0;
    }

    /// Flip the pitch-axis reversal multiplier.
    pub fn reverse_y(&mut self) {
        self.reversal.y *= -1.0;
    }

    /// Apply a configuration command.
    pub fn apply(&mut self, command: CameraCommand) -> CameraResult<()> {
        match command {
            CameraCommand::SetModel(model) => self.set_model(model)?,
            CameraCommand::ReverseX => self.reverse_x(),
            CameraCommand::ReverseY => self.reverse_y(),
        }
        Ok(())
    }

    pub fn plane_uv(&self) -> PlaneTriple {
        self.plane_uv
    }

    pub fn plane_st(&self) -> PlaneTriple {
        self.plane_st
    }

    /// Current orientation, x = yaw and y = pitch in degrees.
    pub fn orientation(&self) -> Vec2 {
        self.orientation
    }

    pub fn reversal(&self) -> Vec2 {
        self.reversal
    }

    /// Rotation built from pitch about X, then yaw about Y, each axis
    /// scaled by its reversal multiplier.
    pub fn rotation(&self) -> Mat4 {
        Mat4::IDENTITY
            .rotated_degrees(self.orientation.y, Vec3::new(self.reversal.y, 0.0, 0.0))
            .rotated_degrees(self.orientation.x, Vec3::new(0.0, self.reversal.x, 0.0))
    }

    /// Map a screen-plane sample to a world-space ray.
    ///
    /// Pure function of the camera state and `screen_pos`.
    pub fn gen_ray(&self, screen_pos: Vec3) -> Ray {
        let uv_pos = self.uv_from_screen * screen_pos;
        let rot = self.rotation();

        // Both halves are rotated as directions (w = 0)
        Ray::new(
            rot.transform_vector3(uv_pos),
            rot.transform_vector3(screen_pos - uv_pos),
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_model(CameraModel::Pinhole)
    }
}

/// Validate both planes and build `M_uv * inverse(M_st)`.
fn plane_mapping(plane_uv: &PlaneTriple, plane_st: &PlaneTriple) -> CameraResult<Mat3> {
    if plane_uv.is_degenerate() {
        return Err(CameraError::DegenerateBasis { plane: "UV" });
    }
    if plane_st.is_degenerate() {
        return Err(CameraError::DegenerateBasis { plane: "ST" });
    }

    let st = plane_st.to_mat3();
    let det = st.determinant();
    // |det| over the product of the column lengths is the normalized volume
    // of the basis, 1 for orthogonal columns and 0 for a singular one
    let scale = st.x_axis.length() * st.y_axis.length() * st.z_axis.length();
    // Negated comparison also rejects NaN
    if !(det.abs() > DEGENERATE_EPSILON * scale) {
        return Err(CameraError::SingularBasis { det });
    }

    Ok(plane_uv.to_mat3() * st.inverse())
}
