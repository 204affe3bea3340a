//! Scene ownership.
//!
//! A `Scene` owns the primitives; [`Scene::hittables`] hands the renderer a
//! borrowed [`HittableList`] that lives no longer than the scene itself.
//! Whether the scene is rebuilt every frame or kept for the whole session
//! is up to the caller.

use crate::{Color, Hittable, HittableList, Sphere, Triangle};
use glc_math::Vec3;
use serde::Deserialize;

/// Primitive storage for a renderable scene.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub triangles: Vec<Triangle>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Four colored spheres standing on a red/green floor.
    pub fn demo() -> Self {
        let spheres = vec![
            Sphere::new(Vec3::new(-1.0, 0.0, -7.0), 0.5, Color::new(1.0, 1.0, 0.0)),
            Sphere::new(Vec3::new(-1.0, 0.0, -4.0), 0.5, Color::new(0.0, 1.0, 1.0)),
            Sphere::new(Vec3::new(1.0, 0.0, -7.0), 0.5, Color::new(1.0, 0.0, 1.0)),
            Sphere::new(Vec3::new(1.0, 0.0, -4.0), 0.5, Color::new(1.0, 1.0, 1.0)),
        ];

        let triangles = vec![
            Triangle::new(
                Vec3::new(-2.0, -0.5, -2.0),
                Vec3::new(-2.0, -0.5, -10.0),
                Vec3::new(2.0, -0.5, -2.0),
                Color::new(1.0, 0.0, 0.0),
            ),
            Triangle::new(
                Vec3::new(2.0, -0.5, -2.0),
                Vec3::new(-2.0, -0.5, -10.0),
                Vec3::new(2.0, -0.5, -10.0),
                Color::new(0.0, 1.0, 0.0),
            ),
        ];

        Self { spheres, triangles }
    }

    /// Add a sphere.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Add a triangle.
    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Total number of primitives.
    pub fn len(&self) -> usize {
        self.spheres.len() + self.triangles.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow every primitive as one hittable list.
    pub fn hittables(&self) -> HittableList<'_> {
        self.spheres
            .iter()
            .map(|s| s as &dyn Hittable)
            .chain(self.triangles.iter().map(|t| t as &dyn Hittable))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ray;
    use glc_math::Interval;

    #[test]
    fn test_demo_scene_contents() {
        let scene = Scene::demo();
        assert_eq!(scene.spheres.len(), 4);
        assert_eq!(scene.triangles.len(), 2);
        assert_eq!(scene.hittables().len(), 6);
    }

    #[test]
    fn test_demo_floor_is_hit_from_above() {
        let scene = Scene::demo();
        let world = scene.hittables();

        // Straight down between the spheres lands on the red floor half
        let ray = Ray::new(Vec3::new(0.5, 1.0, -3.0), Vec3::NEG_Y);
        let rec = world.hit(&ray, Interval::new(0.01, f32::INFINITY)).unwrap();

        assert!((rec.t - 1.5).abs() < 1e-5);
        assert_eq!(rec.color, Color::new(1.0, 0.0, 0.0));
        assert!((rec.normal - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_scene_from_json() {
        let json = r#"{
            "spheres": [
                { "center": [0.0, 0.0, -3.0], "radius": 1.0, "color": [0.2, 0.4, 0.6] }
            ],
            "triangles": [
                { "a": [0, 0, 0], "b": [1, 0, 0], "c": [0, 1, 0], "color": [1, 1, 1] }
            ]
        }"#;
        let scene: Scene = serde_json::from_str(json).unwrap();

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.spheres[0].center, Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(scene.triangles[0].b, Vec3::X);
    }

    #[test]
    fn test_empty_scene() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Color::ONE));
        assert!(!scene.is_empty());
        assert_eq!(scene.hittables().len(), 1);
    }
}
