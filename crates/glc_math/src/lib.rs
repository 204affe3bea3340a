// Re-export glam for convenience
pub use glam::*;

// GLC math types
mod interval;
mod ray;
mod transform;

pub use interval::Interval;
pub use ray::Ray;
pub use transform::Mat4Ext;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_mat3_columns_are_points() {
        // Points packed as columns: M * e_i picks out the i-th point.
        let m = Mat3::from_cols(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
        );
        assert_eq!(m * Vec3::Y, Vec3::new(0.0, 1.0, -1.0));
        assert!(m.determinant().abs() > 0.5);
    }
}
