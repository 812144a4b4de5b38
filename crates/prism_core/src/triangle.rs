//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::hittable::{Hittable, SurfaceHit};
use prism_math::{Interval, Ray, Vec3};

/// A triangle primitive. The normal follows the counter-clockwise winding
/// of `v0 -> v1 -> v2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length, zero when degenerate)
    normal: Vec3,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let normal = edge1.cross(edge2).normalize_or_zero();

        Self { v0, v1, v2, normal }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle (or the triangle is degenerate)
        if a.abs() < 1e-8 {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
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

    // Triangle in XY plane at z=-1, facing the origin
    fn facing_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
        )
    }

    #[test]
    fn test_triangle_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = facing_triangle().hit(&ray, Interval::POSITIVE).unwrap();

        assert!((hit.t - 1.0).abs() < 0.001);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_triangle_miss() {
        // Ray pointing away
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(facing_triangle().hit(&ray, Interval::POSITIVE).is_none());

        // Ray passing beside the triangle
        let ray = Ray::new(Vec3::ZERO, Vec3::new(2.0, 0.0, -1.0));
        assert!(facing_triangle().hit(&ray, Interval::POSITIVE).is_none());
    }

    #[test]
    fn test_triangle_degenerate() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(tri.normal(), Vec3::ZERO);

        let ray = Ray::new(Vec3::new(0.5, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(tri.hit(&ray, Interval::POSITIVE).is_none());
    }
}
