//! Infinite plane primitive.

use crate::hittable::{Hittable, SurfaceHit};
use prism_math::{Interval, Ray, Vec3};

/// Denominators below this are treated as a ray parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-8;

/// An infinite plane through `point` facing along `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Create a new plane. The normal is normalized; a zero normal yields a
    /// plane that is never hit.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
        }
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(SurfaceHit {
            t,
            normal: self.normal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 3.0, 0.0))
    }

    #[test]
    fn test_plane_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -1.0));
        let hit = floor().hit(&ray, Interval::POSITIVE).unwrap();

        assert!((hit.t - 1.0).abs() < 1e-6);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_plane_behind_origin() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(floor().hit(&ray, Interval::POSITIVE).is_none());
    }

    #[test]
    fn test_plane_parallel() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(floor().hit(&ray, Interval::POSITIVE).is_none());
    }

    #[test]
    fn test_plane_origin_on_surface() {
        let ray = Ray::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 1.0, -1.0));
        assert!(floor().hit(&ray, Interval::POSITIVE).is_none());
    }

    #[test]
    fn test_plane_zero_normal() {
        let plane = Plane::new(Vec3::ZERO, Vec3::ZERO);
        let ray = Ray::new(Vec3::Y, Vec3::new(0.0, -1.0, 0.0));
        assert!(plane.hit(&ray, Interval::POSITIVE).is_none());
    }
}
