use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// The direction does not need to be normalized by the caller. Consumers that
/// need a unit vector (shading, reflection, shadow tests) call
/// [`Ray::unit_direction`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Unit-length direction, or zero for a degenerate ray.
    #[inline]
    pub fn unit_direction(&self) -> Vec3 {
        self.direction.normalize_or_zero()
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
