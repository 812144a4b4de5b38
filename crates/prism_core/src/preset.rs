//! Built-in demo scenes.
//!
//! Both presets assume the fixed pinhole at the origin looking down -Z.

use std::fmt;
use std::str::FromStr;

use prism_math::Vec3;

use crate::material::{Color, Material};
use crate::scene::{Scene, SceneError, SceneResult};
use crate::{Plane, Sphere, Triangle};

/// Selectable preset scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Box room with a mirror-like sphere and two small spheres
    Room,
    /// Reflective floor with a pyramid, an icosahedron-like cluster and spheres
    Pyramid,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Room, Preset::Pyramid];

    /// Build a fresh scene for this preset.
    pub fn build(self) -> SceneResult<Scene> {
        let scene = match self {
            Preset::Room => room()?,
            Preset::Pyramid => pyramid()?,
        };
        log::debug!("Built preset {} with {} shapes", self, scene.len());
        Ok(scene)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Room => write!(f, "room"),
            Preset::Pyramid => write!(f, "pyramid"),
        }
    }
}

impl FromStr for Preset {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "room" => Ok(Preset::Room),
            "2" | "pyramid" => Ok(Preset::Pyramid),
            other => Err(SceneError::UnknownPreset(other.to_string())),
        }
    }
}

/// Plastic-like surface: dim ambient, full diffuse, white highlight.
fn plastic(color: Color, shininess: f32) -> Material {
    Material::new(color * 0.1, color, Color::splat(0.6), shininess)
}

/// Flat wall colour with no highlight.
fn matte(color: Color) -> Material {
    Material::new(color * 0.1, color, Color::ZERO, 1.0)
}

/// Add an axis-aligned quad as two triangles wound `a -> b -> c -> d`.
fn add_quad(scene: &mut Scene, [a, b, c, d]: [Vec3; 4], material: Material) -> SceneResult<()> {
    scene.add(Triangle::new(a, b, c), material)?;
    scene.add(Triangle::new(a, c, d), material)?;
    Ok(())
}

fn room() -> SceneResult<Scene> {
    let mut scene = Scene::new(Vec3::new(0.0, 2.5, -7.75));

    // Reflective grey sphere
    scene.add(
        Sphere::new(Vec3::new(0.0, -1.0, -7.0), 1.0),
        plastic(Color::splat(0.4), 64.0).with_reflection(Color::splat(0.5)),
    )?;
    // Small blue sphere in front of it
    scene.add(
        Sphere::new(Vec3::new(0.5, -1.7, -6.5), 0.3),
        plastic(Color::new(0.1, 0.2, 0.9), 32.0),
    )?;
    // Green sphere off to the left
    scene.add(
        Sphere::new(Vec3::new(-1.4, -1.5, -6.0), 0.5),
        plastic(Color::new(0.2, 0.8, 0.2), 16.0),
    )?;

    // Floor and ceiling
    scene.add(
        Plane::new(Vec3::new(0.0, -2.0, 0.0), Vec3::Y),
        matte(Color::splat(0.6)).with_reflection(Color::splat(0.15)),
    )?;
    scene.add(
        Plane::new(Vec3::new(0.0, 2.75, 0.0), Vec3::NEG_Y),
        matte(Color::splat(0.8)),
    )?;

    // Back wall
    add_quad(
        &mut scene,
        [
            Vec3::new(-2.75, -2.0, -10.5),
            Vec3::new(2.75, -2.0, -10.5),
            Vec3::new(2.75, 2.75, -10.5),
            Vec3::new(-2.75, 2.75, -10.5),
        ],
        matte(Color::splat(0.7)),
    )?;
    // Left wall (red), facing +X
    add_quad(
        &mut scene,
        [
            Vec3::new(-2.75, -2.0, -3.0),
            Vec3::new(-2.75, -2.0, -10.5),
            Vec3::new(-2.75, 2.75, -10.5),
            Vec3::new(-2.75, 2.75, -3.0),
        ],
        matte(Color::new(0.8, 0.1, 0.1)),
    )?;
    // Right wall (blue), facing -X
    add_quad(
        &mut scene,
        [
            Vec3::new(2.75, -2.0, -10.5),
            Vec3::new(2.75, -2.0, -3.0),
            Vec3::new(2.75, 2.75, -3.0),
            Vec3::new(2.75, 2.75, -10.5),
        ],
        matte(Color::new(0.1, 0.1, 0.8)),
    )?;

    Ok(scene)
}

fn pyramid() -> SceneResult<Scene> {
    let mut scene = Scene::new(Vec3::new(4.0, 6.0, -1.0));

    // Mirror-ish floor
    scene.add(
        Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y),
        matte(Color::splat(0.5)).with_reflection(Color::splat(0.3)),
    )?;
    // Back wall
    scene.add(
        Plane::new(Vec3::new(0.0, 0.0, -12.0), Vec3::Z),
        matte(Color::new(0.3, 0.3, 0.4)),
    )?;

    // Shiny yellow sphere
    scene.add(
        Sphere::new(Vec3::new(1.0, -0.5, -3.5), 0.5),
        plastic(Color::new(0.9, 0.8, 0.1), 128.0).with_reflection(Color::splat(0.2)),
    )?;
    // Red sphere
    scene.add(
        Sphere::new(Vec3::new(-1.5, -0.2, -6.0), 0.8),
        plastic(Color::new(0.8, 0.1, 0.1), 32.0),
    )?;

    // Square pyramid, apex up
    let apex = Vec3::new(-0.5, 1.5, -8.5);
    let base = [
        Vec3::new(-2.0, -1.0, -7.0),
        Vec3::new(1.0, -1.0, -7.0),
        Vec3::new(1.0, -1.0, -10.0),
        Vec3::new(-2.0, -1.0, -10.0),
    ];
    let pyramid_material = plastic(Color::new(0.1, 0.6, 0.6), 16.0)
        .with_reflection(Color::new(0.0, 0.2, 0.2));
    for (i, &corner) in base.iter().enumerate() {
        let next = base[(i + 1) % base.len()];
        scene.add(Triangle::new(corner, next, apex), pyramid_material)?;
    }

    Ok(scene)
}
