//! Recursive Whitted-style tracer.
//!
//! One call resolves the nearest hit, shades it with Phong, tests a shadow ray
//! and follows the mirror reflection while the depth budget lasts.

use prism_core::{Color, Scene, ShapeId};
use prism_math::{reflect, Ray};

use crate::config::RenderConfig;
use crate::phong;
use crate::query::{find_nearest, find_occluder};

/// Ray counts gathered while tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Top-level calls (one per pixel when driven by the renderer)
    pub primary_rays: u64,
    /// Recursive reflection calls
    pub reflection_rays: u64,
    /// Shadow rays cast (one per surface hit)
    pub shadow_rays: u64,
    /// Surface hits whose light was blocked
    pub occluded_hits: u64,
    /// Deepest nesting of reflection calls seen
    pub max_bounce: u32,
}

impl TraceStats {
    /// Fold another set of counts into this one.
    pub fn merge(&mut self, other: &TraceStats) {
        self.primary_rays += other.primary_rays;
        self.reflection_rays += other.reflection_rays;
        self.shadow_rays += other.shadow_rays;
        self.occluded_hits += other.occluded_hits;
        self.max_bounce = self.max_bounce.max(other.max_bounce);
    }
}

/// Traces rays against a borrowed, read-only scene.
#[derive(Debug, Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a Scene,
    config: &'a RenderConfig,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene, config: &'a RenderConfig) -> Self {
        Self { scene, config }
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    pub fn config(&self) -> &'a RenderConfig {
        self.config
    }

    /// Compute the color seen along `ray`.
    ///
    /// `depth` is the number of reflection bounces still allowed. `exclude`
    /// names the surface the ray starts on, if any.
    pub fn trace(&self, ray: &Ray, depth: u32, exclude: Option<ShapeId>) -> Color {
        let mut stats = TraceStats::default();
        self.trace_with_stats(ray, depth, exclude, &mut stats)
    }

    /// Same as [`Tracer::trace`], accumulating ray counts into `stats`.
    pub fn trace_with_stats(
        &self,
        ray: &Ray,
        depth: u32,
        exclude: Option<ShapeId>,
        stats: &mut TraceStats,
    ) -> Color {
        stats.primary_rays += 1;
        self.trace_recursive(ray, depth, exclude, 0, stats)
    }

    fn trace_recursive(
        &self,
        ray: &Ray,
        depth: u32,
        exclude: Option<ShapeId>,
        bounce: u32,
        stats: &mut TraceStats,
    ) -> Color {
        let Some(hit) = find_nearest(self.scene, ray, exclude) else {
            return Color::ZERO;
        };

        let light_position = self.scene.light_position();
        let terms = phong::shade(ray, light_position, &hit);

        let shadow_ray = Ray::new(hit.point, (light_position - hit.point).normalize_or_zero());
        stats.shadow_rays += 1;
        let lighting = match find_occluder(self.scene, &shadow_ray, Some(hit.shape_id), &self.config.shadow) {
            Some(occluder) => {
                log::trace!("{} shadowed by {}", hit.shape_id, occluder);
                stats.occluded_hits += 1;
                terms.ambient
            }
            None => terms.combined(),
        };

        // Out of budget or nothing to reflect: no recursive call
        let strength = hit.material.reflective_strength;
        if depth == 0 || !hit.material.is_reflective() {
            return lighting;
        }

        let reflection_ray = Ray::new(hit.point, reflect(ray.unit_direction(), hit.normal));
        stats.reflection_rays += 1;
        stats.max_bounce = stats.max_bounce.max(bounce + 1);

        let reflected = self.trace_recursive(&reflection_ray, depth - 1, Some(hit.shape_id), bounce + 1, stats);

        lighting + reflected * strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Material, Plane, Sphere};
    use prism_math::Vec3;

    fn red_plastic() -> Material {
        Material::new(
            Color::new(0.1, 0.0, 0.0),
            Color::new(0.7, 0.0, 0.0),
            Color::splat(0.3),
            16.0,
        )
    }

    /// Two mirrors facing each other across the origin.
    fn hall_of_mirrors() -> Scene {
        let mut scene = Scene::new(Vec3::new(0.0, 0.5, 0.0));
        let mirror = Material::new(Color::splat(0.05), Color::ZERO, Color::ZERO, 1.0)
            .with_reflection(Color::splat(0.9));
        scene.add(Plane::new(Vec3::new(0.0, 0.0, -1.0), Vec3::Z), mirror).unwrap();
        scene.add(Plane::new(Vec3::new(0.0, 0.0, 1.0), Vec3::NEG_Z), mirror).unwrap();
        scene
    }

    #[test]
    fn test_miss_is_black_at_any_depth() {
        let mut scene = Scene::new(Vec3::new(0.0, 5.0, 0.0));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0), red_plastic()).unwrap();
        let config = RenderConfig::default();
        let tracer = Tracer::new(&scene, &config);

        let away = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        for depth in [0, 1, 10] {
            assert_eq!(tracer.trace(&away, depth, None), Color::ZERO);
        }
    }

    #[test]
    fn test_lit_hit_uses_full_phong() {
        let mut scene = Scene::new(Vec3::new(0.0, 0.0, 10.0));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0), red_plastic()).unwrap();
        let config = RenderConfig::default();

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = Tracer::new(&scene, &config).trace(&ray, 10, None);

        // Normal, light and viewer aligned
        let expected = Color::new(0.1, 0.0, 0.0) + Color::new(0.7, 0.0, 0.0) + Color::splat(0.3);
        assert!((color - expected).length() < 1e-5, "got {color}");
    }

    #[test]
    fn test_occluded_hit_is_ambient_only() {
        let mut scene = Scene::new(Vec3::new(0.0, 0.0, 10.0));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0), red_plastic()).unwrap();
        // Blocker behind the camera, between the sphere and the light
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0), Material::default()).unwrap();
        let config = RenderConfig::default();

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut stats = TraceStats::default();
        let color = Tracer::new(&scene, &config).trace_with_stats(&ray, 10, None, &mut stats);

        assert_eq!(color, Color::new(0.1, 0.0, 0.0));
        assert_eq!(stats.occluded_hits, 1);
    }

    #[test]
    fn test_recursion_is_bounded_by_depth() {
        let scene = hall_of_mirrors();
        let config = RenderConfig::default();
        let tracer = Tracer::new(&scene, &config);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        for depth in [0, 1, 3, 10] {
            let mut stats = TraceStats::default();
            let color = tracer.trace_with_stats(&ray, depth, None, &mut stats);

            assert!(color.is_finite());
            assert_eq!(stats.primary_rays, 1);
            assert_eq!(stats.reflection_rays, depth as u64);
            assert_eq!(stats.max_bounce, depth);
        }
    }

    #[test]
    fn test_deeper_budget_adds_reflected_light() {
        let scene = hall_of_mirrors();
        let config = RenderConfig::default();
        let tracer = Tracer::new(&scene, &config);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let shallow = tracer.trace(&ray, 0, None);
        let deep = tracer.trace(&ray, 10, None);

        assert_eq!(shallow, Color::splat(0.05));
        assert!(deep.x > shallow.x);
    }

    #[test]
    fn test_non_reflective_surface_stops_recursion() {
        let mut scene = Scene::new(Vec3::new(0.0, 0.0, 10.0));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0), red_plastic()).unwrap();
        let config = RenderConfig::default();

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut stats = TraceStats::default();
        Tracer::new(&scene, &config).trace_with_stats(&ray, 10, None, &mut stats);

        assert_eq!(stats.reflection_rays, 0);
        assert_eq!(stats.shadow_rays, 1);
    }

    #[test]
    fn test_stats_merge() {
        let mut a = TraceStats {
            primary_rays: 1,
            reflection_rays: 2,
            shadow_rays: 3,
            occluded_hits: 1,
            max_bounce: 2,
        };
        let b = TraceStats {
            primary_rays: 4,
            reflection_rays: 0,
            shadow_rays: 4,
            occluded_hits: 0,
            max_bounce: 5,
        };
        a.merge(&b);
        assert_eq!(a.primary_rays, 5);
        assert_eq!(a.shadow_rays, 7);
        assert_eq!(a.max_bounce, 5);
    }
}
