//! Linear-scan scene queries: nearest hit and shadow occluders.

use prism_core::{Intersection, Scene, ShapeId};
use prism_math::Ray;

use crate::config::ShadowSettings;

/// Find the hit closest to the ray origin, ignoring the shape `exclude`.
///
/// Distance ties go to the shape stored first in the scene.
pub fn find_nearest(scene: &Scene, ray: &Ray, exclude: Option<ShapeId>) -> Option<Intersection> {
    let mut closest: Option<Intersection> = None;
    let mut closest_so_far = f32::MAX;

    for shape in scene.shapes() {
        // Skipping the surface a ray leaves avoids re-hitting it
        if Some(shape.id()) == exclude {
            continue;
        }

        if let Some(hit) = shape.intersect(ray) {
            let distance = hit.distance_from(ray.origin());
            if distance < closest_so_far {
                closest_so_far = distance;
                closest = Some(hit);
            }
        }
    }

    closest
}

/// Find the first shape blocking `shadow_ray` on its way to the light.
///
/// A hit blocks only if it is farther than the self-intersection epsilon and
/// nearer than the light minus the light margin. Returns `None` when lit.
pub fn find_occluder(
    scene: &Scene,
    shadow_ray: &Ray,
    exclude: Option<ShapeId>,
    settings: &ShadowSettings,
) -> Option<ShapeId> {
    let light_distance = shadow_ray.origin().distance(scene.light_position());
    let blocking = settings.blocking_range(light_distance);

    scene
        .shapes()
        .iter()
        .filter(|shape| Some(shape.id()) != exclude)
        .find_map(|shape| {
            let hit = shape.intersect(shadow_ray)?;
            blocking
                .surrounds(hit.distance_from(shadow_ray.origin()))
                .then_some(shape.id())
        })
}
