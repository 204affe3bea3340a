//! Pointer-drag look-around.
//!
//! Converts drag deltas in pixels into a yaw/pitch orientation for
//! [`Camera::set_orientation`](crate::Camera::set_orientation). Horizontal
//! motion drives yaw and vertical motion drives pitch.

use glc_math::Vec2;

/// Pitch limit in degrees (either direction).
pub const MAX_PITCH: f32 = 90.0;

/// Clamp a pitch angle to `[-90, 90]` degrees.
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-MAX_PITCH, MAX_PITCH)
}

/// Wrap a yaw angle into `(-180, 180]` degrees.
pub fn wrap_yaw(yaw: f32) -> f32 {
    let wrapped = (yaw + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

/// Degrees of rotation per pixel of drag for a given viewport.
///
/// Scaled so the same gesture covers the same angle on any window size.
pub fn rotation_scale(viewport: Vec2) -> f32 {
    (viewport.x / 450.0).min(viewport.y / 270.0)
}

/// Tracks an in-progress drag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitDrag {
    state: Option<DragStart>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragStart {
    pointer: Vec2,
    orientation: Vec2,
}

impl OrbitDrag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging from `pointer` with the camera at `orientation`.
    pub fn begin(&mut self, pointer: Vec2, orientation: Vec2) {
        self.state = Some(DragStart {
            pointer,
            orientation,
        });
    }

    /// Stop dragging. Further updates are ignored until the next `begin`.
    pub fn end(&mut self) {
        self.state = None;
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Feed a new pointer position.
    ///
    /// `current` is the camera's orientation right now. Returns the new
    /// `(yaw, pitch)` when a drag is active and it differs from `current`,
    /// `None` otherwise.
    pub fn update(&self, pointer: Vec2, viewport: Vec2, current: Vec2) -> Option<Vec2> {
        let start = self.state?;

        let scale = rotation_scale(viewport);
        if !(scale > 0.0) {
            return None;
        }

        let raw = start.orientation + (pointer - start.pointer) / scale;
        let angle = Vec2::new(wrap_yaw(raw.x), clamp_pitch(raw.y));

        ((angle - current).length() > f32::EPSILON).then_some(angle)
    }
}
