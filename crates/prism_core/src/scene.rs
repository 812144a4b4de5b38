//! Scene: an ordered shape collection plus a point light.
//!
//! A scene is built once, then handed to the renderer, which only reads it.
//! Switching scenes replaces the whole value.

use prism_math::Vec3;
use thiserror::Error;

use crate::hittable::Hittable;
use crate::material::Material;
use crate::shape::{Shape, ShapeId};

/// Errors that can occur while assembling a scene.
#[derive(Error, Debug, PartialEq)]
pub enum SceneError {
    #[error("Shape id {0} is already used in this scene")]
    DuplicateShapeId(ShapeId),

    #[error("No shape ids left to assign after {0}")]
    IdsExhausted(ShapeId),

    #[error("Unknown scene preset: {0}")]
    UnknownPreset(String),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// A complete scene.
///
/// Shape ids are unique. Iteration order is insertion order, which the
/// renderer uses to break distance ties.
#[derive(Debug)]
pub struct Scene {
    shapes: Vec<Shape>,
    light_position: Vec3,
    /// Next id for `add`; `None` once `u32::MAX` is taken
    next_id: Option<u32>,
}

impl Scene {
    /// Create an empty scene lit by a point light.
    pub fn new(light_position: Vec3) -> Self {
        Self {
            shapes: Vec::new(),
            light_position,
            next_id: Some(0),
        }
    }

    /// Add geometry with a material, assigning it the next free id.
    pub fn add(&mut self, geometry: impl Hittable + 'static, material: Material) -> SceneResult<ShapeId> {
        let id = self
            .next_id
            .map(ShapeId)
            .ok_or(SceneError::IdsExhausted(ShapeId(u32::MAX)))?;
        self.next_id = id.0.checked_add(1);
        self.shapes.push(Shape::new(id, geometry, material));
        Ok(id)
    }

    /// Insert a shape that already carries an id.
    pub fn insert(&mut self, shape: Shape) -> SceneResult<()> {
        if self.get(shape.id()).is_some() {
            return Err(SceneError::DuplicateShapeId(shape.id()));
        }
        if let Some(next) = self.next_id {
            if shape.id().0 >= next {
                self.next_id = shape.id().0.checked_add(1);
            }
        }
        self.shapes.push(shape);
        Ok(())
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn light_position(&self) -> Vec3 {
        self.light_position
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
