//! Render configuration.
//!
//! The epsilon constants are tuned for scenes a few units across, as in the
//! built-in presets. Scenes at a very different coordinate scale should
//! override them through `ShadowSettings`.

use std::fs;
use std::path::Path;

use prism_math::Interval;
use serde::Deserialize;
use thiserror::Error;

/// Default reflection bounce budget for primary rays.
pub const DEFAULT_MAX_DEPTH: u32 = 10;

/// Occluder hits closer than this to the shadow ray origin are the surface
/// the ray starts on.
pub const SELF_INTERSECTION_EPSILON: f32 = 1e-5;

/// Occluder hits within this distance of the light count as the light itself.
pub const LIGHT_MARGIN: f32 = 0.01;

/// Default bucket size in pixels for parallel rendering.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Errors that can occur while loading a render configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid render config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bucket_size must be at least 1")]
    ZeroBucketSize,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tolerances for the shadow ray visibility test.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShadowSettings {
    pub self_intersection_epsilon: f32,
    pub light_margin: f32,
}

impl ShadowSettings {
    /// Distances along a shadow ray at which a hit blocks the light.
    ///
    /// The margin is a flat offset, not scaled by `light_distance`.
    pub fn blocking_range(&self, light_distance: f32) -> Interval {
        Interval::new(
            self.self_intersection_epsilon,
            light_distance - self.light_margin,
        )
    }
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            self_intersection_epsilon: SELF_INTERSECTION_EPSILON,
            light_margin: LIGHT_MARGIN,
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum reflection bounces per primary ray
    pub max_depth: u32,
    /// Shadow ray tolerances
    pub shadow: ShadowSettings,
    /// Trace buckets on the rayon thread pool
    pub parallel: bool,
    /// Bucket edge length in pixels (parallel mode only)
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            shadow: ShadowSettings::default(),
            parallel: false,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config from disk.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.bucket_size == 0 {
            return Err(ConfigError::ZeroBucketSize);
        }
        Ok(())
    }

    /// Set the reflection bounce budget.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable bucket-parallel rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
