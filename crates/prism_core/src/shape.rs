//! Shapes: geometry plus identity plus material.

use std::fmt;

use prism_math::{Interval, Ray, Vec3};

use crate::hittable::Hittable;
use crate::material::Material;

/// Identity of a shape within a scene.
///
/// "No shape" is spelled `Option::<ShapeId>::None`, so it can never collide
/// with a real id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u32);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of a ray hitting one shape.
///
/// A miss is `None` at the call site; every field here is meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Ray parameter of the hit
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Unit outward-facing surface normal
    pub normal: Vec3,
    /// Material of the hit shape, copied by value
    pub material: Material,
    /// Identity of the hit shape
    pub shape_id: ShapeId,
}

impl Intersection {
    /// Euclidean distance from `origin` to the hit point.
    #[inline]
    pub fn distance_from(&self, origin: Vec3) -> f32 {
        self.point.distance(origin)
    }
}

/// A scene object: an id, a geometric solver and the material it exposes.
#[derive(Debug)]
pub struct Shape {
    id: ShapeId,
    geometry: Box<dyn Hittable>,
    material: Material,
}

impl Shape {
    pub fn new(id: ShapeId, geometry: impl Hittable + 'static, material: Material) -> Self {
        Self {
            id,
            geometry: Box::new(geometry),
            material,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Nearest hit strictly in front of the ray origin.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let hit = self.geometry.hit(ray, Interval::POSITIVE)?;
        Some(Intersection {
            t: hit.t,
            point: ray.at(hit.t),
            normal: hit.normal,
            material: self.material,
            shape_id: self.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Sphere};

    #[test]
    fn test_intersect_stamps_identity() {
        let material = Material::new(Color::X, Color::Y, Color::Z, 8.0);
        let shape = Shape::new(
            ShapeId(7),
            Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0),
            material,
        );

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = shape.intersect(&ray).unwrap();

        assert_eq!(hit.shape_id, ShapeId(7));
        assert_eq!(hit.material, material);
        assert!((hit.point - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
        assert!((hit.distance_from(Vec3::ZERO) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_intersect_miss() {
        let shape = Shape::new(
            ShapeId(0),
            Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0),
            Material::default(),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(shape.intersect(&ray).is_none());
    }
}
