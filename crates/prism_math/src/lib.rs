// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Reflect `v` about the unit normal `n`.
///
/// Returns: v - 2 (v . n) n
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
