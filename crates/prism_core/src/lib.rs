//! Prism Core - scene description for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Geometry**: `Sphere`, `Plane`, `Triangle` behind the `Hittable` trait
//! - **Shapes**: geometry + `Material` + `ShapeId`, yielding `Intersection`s
//! - **Scenes**: `Scene` (shapes + point light) and the built-in `Preset`s
//!
//! # Example
//!
//! ```
//! use prism_core::{Material, Scene, Sphere};
//! use prism_math::{Ray, Vec3};
//!
//! let mut scene = Scene::new(Vec3::new(0.0, 5.0, 0.0));
//! let id = scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0), Material::default()).unwrap();
//!
//! let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
//! let hit = scene.shapes()[0].intersect(&ray).unwrap();
//! assert_eq!(hit.shape_id, id);
//! ```

pub mod hittable;
pub mod material;
pub mod plane;
pub mod preset;
pub mod scene;
pub mod shape;
pub mod sphere;
pub mod triangle;

// Re-export commonly used types
pub use hittable::{Hittable, SurfaceHit};
pub use material::{Color, Material};
pub use plane::Plane;
pub use preset::Preset;
pub use scene::{Scene, SceneError, SceneResult};
pub use shape::{Intersection, Shape, ShapeId};
pub use sphere::Sphere;
pub use triangle::Triangle;
