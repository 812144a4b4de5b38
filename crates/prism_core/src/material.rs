//! Phong surface description.

use prism_math::Vec3;

/// Color type alias (RGB intensities, nominally 0-1 but unbounded above)
pub type Color = Vec3;

/// Phong material owned by a shape and copied into every intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient reflectance, applied regardless of light visibility
    pub ambient: Color,
    /// Diffuse (Lambert) reflectance
    pub diffuse: Color,
    /// Specular reflectance
    pub specular: Color,
    /// Specular exponent
    pub shininess: f32,
    /// Per-channel weight of the mirror-reflected color
    pub reflective_strength: Color,
}

impl Material {
    /// A material that reflects nothing and is never lit.
    pub const BLACK: Material = Material {
        ambient: Color::ZERO,
        diffuse: Color::ZERO,
        specular: Color::ZERO,
        shininess: 1.0,
        reflective_strength: Color::ZERO,
    };

    /// Create a non-reflective Phong material.
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
            reflective_strength: Color::ZERO,
        }
    }

    /// Set the reflective strength.
    pub fn with_reflection(mut self, reflective_strength: Color) -> Self {
        self.reflective_strength = reflective_strength;
        self
    }

    /// A pure mirror: no local shading, full reflection on every channel.
    pub fn mirror() -> Self {
        Self::BLACK.with_reflection(Color::ONE)
    }

    /// Check if any channel carries reflected light.
    pub fn is_reflective(&self) -> bool {
        self.reflective_strength.max_element() > 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        // Grey plastic
        Self::new(
            Color::splat(0.1),
            Color::splat(0.5),
            Color::splat(0.5),
            32.0,
        )
    }
}
