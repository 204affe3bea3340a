//! Hittable trait and HitRecord for ray-object intersection.

use crate::Ray;
use glc_math::{Interval, Vec3};

/// Color type alias (linear RGB, nominally 0-1)
pub type Color = Vec3;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal. Orientation is fixed by the primitive,
    /// it is not flipped to face the ray.
    pub normal: Vec3,
    /// Flat surface color of the primitive that was hit
    pub color: Color,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object strictly inside `ray_t`.
    ///
    /// Returns the nearest accepted intersection, or `None`. Grazing and
    /// near-parallel rays are ordinary misses, never errors.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// A non-owning list of hittable objects.
///
/// The primitives are owned by the caller (see [`crate::Scene`]); the list
/// only borrows them for as long as a frame needs them.
#[derive(Clone, Default)]
pub struct HittableList<'a> {
    objects: Vec<&'a dyn Hittable>,
}

impl<'a> HittableList<'a> {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: &'a dyn Hittable) {
        self.objects.push(object);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<'a> FromIterator<&'a dyn Hittable> for HittableList<'a> {
    fn from_iter<I: IntoIterator<Item = &'a dyn Hittable>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Hittable for HittableList<'_> {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sphere, Triangle};

    fn primitives() -> (Vec<Sphere>, Vec<Triangle>) {
        let spheres = vec![
            Sphere::new(Vec3::new(0.0, 0.0, -7.0), 0.5, Color::new(1.0, 1.0, 0.0)),
            Sphere::new(Vec3::new(0.0, 0.0, -4.0), 0.5, Color::new(0.0, 1.0, 1.0)),
            Sphere::new(Vec3::new(3.0, 0.0, -4.0), 0.5, Color::new(1.0, 0.0, 1.0)),
        ];
        let triangles = vec![Triangle::new(
            Vec3::new(-2.0, -2.0, -10.0),
            Vec3::new(2.0, -2.0, -10.0),
            Vec3::new(0.0, 2.0, -10.0),
            Color::new(1.0, 0.0, 0.0),
        )];
        (spheres, triangles)
    }

    #[test]
    fn test_empty_list_misses() {
        let list = HittableList::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(list.is_empty());
        assert!(list.hit(&ray, Interval::new(0.01, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_list_returns_closest_hit() {
        let (spheres, triangles) = primitives();
        let mut list = HittableList::new();
        for s in &spheres {
            list.add(s);
        }
        for t in &triangles {
            list.add(t);
        }
        assert_eq!(list.len(), 4);

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let rec = list.hit(&ray, Interval::new(0.01, f32::INFINITY)).unwrap();

        // Front of the sphere at z = -4
        assert!((rec.t - 3.5).abs() < 1e-5);
        assert_eq!(rec.color, Color::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_list_matches_minimum_of_members_in_any_order() {
        let (spheres, triangles) = primitives();
        let mut members: Vec<&dyn Hittable> = Vec::new();
        members.extend(spheres.iter().map(|s| s as &dyn Hittable));
        members.extend(triangles.iter().map(|t| t as &dyn Hittable));

        let rays = [
            Ray::new(Vec3::ZERO, Vec3::NEG_Z),
            Ray::new(Vec3::new(0.0, 0.0, 2.0), Vec3::NEG_Z),
            Ray::new(Vec3::ZERO, Vec3::new(0.1, 0.05, -1.0)),
            Ray::new(Vec3::ZERO, Vec3::new(3.0, 0.0, -4.0)),
            Ray::new(Vec3::ZERO, Vec3::Y),
        ];
        let interval = Interval::new(0.01, f32::INFINITY);

        for ray in &rays {
            let expected = members
                .iter()
                .filter_map(|m| m.hit(ray, interval))
                .min_by(|a, b| a.t.total_cmp(&b.t));

            let forward: HittableList = members.iter().copied().collect();
            let reversed: HittableList = members.iter().rev().copied().collect();

            assert_eq!(forward.hit(ray, interval), expected);
            assert_eq!(reversed.hit(ray, interval), expected);
        }
    }

    #[test]
    fn test_list_respects_upper_bound() {
        let (spheres, _) = primitives();
        let list: HittableList = spheres.iter().map(|s| s as &dyn Hittable).collect();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        // Nearest surface is at t = 3.5, so a bound of 3.0 finds nothing
        assert!(list.hit(&ray, Interval::new(0.01, 3.0)).is_none());
    }
}
