//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are traced independently on
//! the rayon pool. Each bucket carries its own pixels and ray counts, so
//! workers share nothing but the read-only scene.

use prism_core::Color;

use crate::camera::primary_ray;
use crate::tracer::{TraceStats, Tracer};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of the bucket's first column
    pub x: u32,
    /// Y coordinate of the bucket's first row
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Split a `width` x `height` image into buckets of at most
/// `bucket_size` x `bucket_size` pixels, row by row.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh));
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order within the bucket
    pub pixels: Vec<Color>,
    /// Ray counts for this bucket
    pub stats: TraceStats,
}

impl BucketResult {
    /// Iterate over (x, y, color) in image coordinates.
    pub fn iter_pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        let bucket = self.bucket;
        self.pixels.iter().enumerate().map(move |(i, &color)| {
            let i = i as u32;
            (bucket.x + i % bucket.width, bucket.y + i / bucket.width, color)
        })
    }
}

/// Trace every pixel of one bucket of a `width` x `height` image.
pub fn render_bucket(bucket: &Bucket, tracer: &Tracer, width: u32, height: u32) -> BucketResult {
    let max_depth = tracer.config().max_depth;
    let mut stats = TraceStats::default();
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let ray = primary_ray(bucket.x + local_x, bucket.y + local_y, width, height);
            pixels.push(tracer.trace_with_stats(&ray, max_depth, None, &mut stats));
        }
    }

    BucketResult {
        bucket: *bucket,
        pixels,
        stats,
    }
}
