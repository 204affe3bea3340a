//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection, in the
//! variant that keeps the determinant positive and compares the barycentric
//! terms against it before dividing.

use crate::{
    hittable::{Color, HitRecord, Hittable},
    Ray,
};
use glc_math::{Interval, Vec3};
use serde::Deserialize;

/// Determinants below this are treated as rays parallel to the triangle.
const PARALLEL_EPSILON: f32 = 1e-4;

/// A triangle with a flat color.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Triangle {
    /// Vertices
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    pub color: Color,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, color: Color) -> Self {
        Self { a, b, c, color }
    }

    /// Face normal, `normalize(E2 x E1)`.
    ///
    /// The order fixes the orientation by winding; it does not depend on
    /// which side the ray comes from.
    pub fn normal(&self) -> Vec3 {
        let edge1 = self.b - self.a;
        let edge2 = self.c - self.a;
        edge2.cross(edge1).normalize()
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let edge1 = self.b - self.a;
        let edge2 = self.c - self.a;

        let p = ray.direction().cross(edge2);
        let mut det = edge1.dot(p);

        // Keep det > 0, flip T accordingly
        let t_vec = if det > 0.0 {
            ray.origin() - self.a
        } else {
            det = -det;
            self.a - ray.origin()
        };

        // Ray is parallel to triangle
        if det < PARALLEL_EPSILON {
            return None;
        }

        let u = t_vec.dot(p);
        if u < 0.0 || u > det {
            return None;
        }

        let q = t_vec.cross(edge1);
        let v = ray.direction().dot(q);
        if v < 0.0 || u + v > det {
            return None;
        }

        let t = edge2.dot(q) / det;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(HitRecord {
            t,
            p: ray.point_at(t),
            normal: edge2.cross(edge1).normalize(),
            color: self.color,
        })
    }
}
