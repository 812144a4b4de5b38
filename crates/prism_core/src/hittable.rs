//! Hittable trait for closed-form ray/geometry solvers.

use prism_math::{Interval, Ray, Vec3};
use std::fmt::Debug;

/// Raw result of a geometric solver, before a shape attaches its identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Ray parameter of the hit
    pub t: f32,
    /// Unit outward-facing normal
    pub normal: Vec3,
}

/// Trait for geometry that can be hit by rays.
///
/// Implementations report the nearest hit whose parameter lies strictly inside
/// `ray_t`, or `None`. Degenerate geometry and degenerate rays are misses.
/// Solvers never bias the ray origin; callers exclude surfaces instead.
pub trait Hittable: Debug + Send + Sync {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit>;
}
