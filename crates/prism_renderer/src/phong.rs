//! Phong local illumination.

use prism_core::{Color, Intersection};
use prism_math::{reflect, Ray, Vec3};

/// The three Phong terms for one hit.
///
/// Each term is non-negative per channel; the sum is not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongTerms {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl PhongTerms {
    /// Ambient + diffuse + specular.
    pub fn combined(&self) -> Color {
        self.ambient + self.diffuse + self.specular
    }
}

/// Evaluate the Phong model at `hit` for a point light at `light_position`.
///
/// `ray` is the ray that produced the hit; the viewer looks back along it.
/// Light visibility is not considered here.
pub fn shade(ray: &Ray, light_position: Vec3, hit: &Intersection) -> PhongTerms {
    let material = &hit.material;
    let normal = hit.normal;

    let to_light = (light_position - hit.point).normalize_or_zero();
    let to_viewer = -ray.unit_direction();

    let diffuse = material.diffuse * normal.dot(to_light).max(0.0);

    let reflected_light = reflect(-to_light, normal);
    let highlight = reflected_light.dot(to_viewer).max(0.0).powf(material.shininess);
    let specular = material.specular * highlight;

    PhongTerms {
        ambient: material.ambient,
        diffuse,
        specular,
    }
}
