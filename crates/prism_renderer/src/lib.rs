//! Prism Renderer - recursive Whitted-style ray tracing on the CPU.
//!
//! One primary ray per pixel from a fixed pinhole camera. Each hit is shaded
//! with Phong, tested against the point light with a shadow ray, and
//! followed along its mirror reflection up to a bounded depth.

mod bucket;
mod camera;
mod config;
mod output;
pub mod phong;
mod query;
mod renderer;
mod session;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult};
pub use camera::{primary_ray, primary_rays, PixelRay, IMAGE_PLANE_DISTANCE, PINHOLE};
pub use config::{
    ConfigError, ConfigResult, RenderConfig, ShadowSettings, DEFAULT_BUCKET_SIZE,
    DEFAULT_MAX_DEPTH, LIGHT_MARGIN, SELF_INTERSECTION_EPSILON,
};
pub use output::{color_to_rgba, linear_to_srgb, ImageBuffer, ImageTarget, OutputError};
pub use phong::{shade, PhongTerms};
pub use query::{find_nearest, find_occluder};
pub use renderer::{render_image, render_pixel};
pub use session::RenderSession;
pub use tracer::{TraceStats, Tracer};

/// Re-export core and math types used in the public API
pub use prism_core::{Color, Intersection, Scene, ShapeId};
pub use prism_math::{Ray, Vec3};
