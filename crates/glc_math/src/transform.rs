// Transform utilities for Mat4
//
// Extends glam::Mat4 with the incremental rotation the GLC camera needs.
// Note: glam::Mat4 already provides transform_vector3() (w = 0), which is
// what the camera uses to rotate ray origins and directions.

use glam::{Mat4, Vec3};

/// Extension trait for Mat4 to provide additional transform utilities
pub trait Mat4Ext {
    /// Post-multiply by a rotation of `degrees` about `axis`.
    ///
    /// The axis does not have to be unit length; its sign selects the
    /// rotation direction, so `(-1, 0, 0)` rotates the opposite way to
    /// `(1, 0, 0)`. A zero axis yields the matrix unchanged.
    fn rotated_degrees(&self, degrees: f32, axis: Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotated_degrees(&self, degrees: f32, axis: Vec3) -> Mat4 {
        let Some(axis) = axis.try_normalize() else {
            return *self;
        };
        *self * Mat4::from_axis_angle(axis, degrees.to_radians())
    }
}
