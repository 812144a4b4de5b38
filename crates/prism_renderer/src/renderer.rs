//! Image driver: one primary ray per pixel, traced and written back.

use std::time::Instant;

use prism_core::{Color, Scene};
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::camera::{primary_ray, primary_rays};
use crate::config::RenderConfig;
use crate::output::ImageTarget;
use crate::tracer::{TraceStats, Tracer};

/// Trace the primary ray of a single pixel.
pub fn render_pixel(scene: &Scene, config: &RenderConfig, x: u32, y: u32, width: u32, height: u32) -> Color {
    let ray = primary_ray(x, y, width, height);
    Tracer::new(scene, config).trace(&ray, config.max_depth, None)
}

/// Render the entire scene into `image`.
///
/// The target is initialized first and every pixel is recomputed. Serial and
/// parallel modes produce identical pixels.
pub fn render_image<T: ImageTarget + ?Sized>(
    scene: &Scene,
    image: &mut T,
    config: &RenderConfig,
) -> TraceStats {
    image.initialize();
    let (width, height) = image.dimensions();
    let tracer = Tracer::new(scene, config);
    let start = Instant::now();

    log::debug!(
        "Rendering {}x{} ({} shapes, max depth {}, parallel: {})",
        width,
        height,
        scene.len(),
        config.max_depth,
        config.parallel
    );

    let mut stats = TraceStats::default();
    if config.parallel {
        let buckets = generate_buckets(width, height, config.bucket_size);
        let results: Vec<BucketResult> = buckets
            .par_iter()
            .map(|bucket| render_bucket(bucket, &tracer, width, height))
            .collect();

        for result in &results {
            for (x, y, color) in result.iter_pixels() {
                image.set_pixel(x, y, color);
            }
            stats.merge(&result.stats);
        }
    } else {
        for pixel in primary_rays(width, height) {
            let color = tracer.trace_with_stats(&pixel.ray, config.max_depth, None, &mut stats);
            image.set_pixel(pixel.x, pixel.y, color);
        }
    }

    log::info!(
        "Rendered {}x{} in {:?}: {} primary, {} reflection, {} shadow rays ({} shadowed)",
        width,
        height,
        start.elapsed(),
        stats.primary_rays,
        stats.reflection_rays,
        stats.shadow_rays,
        stats.occluded_hits
    );

    stats
}
