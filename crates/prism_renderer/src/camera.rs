//! Fixed pinhole camera and primary ray generation.
//!
//! The pinhole sits at the origin looking down -Z. Pixel (x, y) maps to the
//! image plane point (i, j, -2) with i, j in [-1, 1). Row y = 0 is the bottom
//! of the image.

use prism_math::{Ray, Vec3};

/// Origin of every primary ray.
pub const PINHOLE: Vec3 = Vec3::ZERO;

/// Distance from the pinhole to the virtual image plane.
pub const IMAGE_PLANE_DISTANCE: f32 = 2.0;

/// A primary ray tagged with the pixel it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRay {
    pub x: u32,
    pub y: u32,
    pub ray: Ray,
}

/// Generate the primary ray for pixel (x, y) of a `width` x `height` image.
///
/// The direction is left un-normalized.
pub fn primary_ray(x: u32, y: u32, width: u32, height: u32) -> Ray {
    let i = -1.0 + 2.0 * x as f32 / width as f32;
    let j = -1.0 + 2.0 * y as f32 / height as f32;
    Ray::new(PINHOLE, Vec3::new(i, j, -IMAGE_PLANE_DISTANCE))
}

/// All primary rays of an image, column by column.
pub fn primary_rays(width: u32, height: u32) -> impl Iterator<Item = PixelRay> {
    (0..width).flat_map(move |x| {
        (0..height).map(move |y| PixelRay {
            x,
            y,
            ray: primary_ray(x, y, width, height),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_and_center_rays() {
        let corner = primary_ray(0, 0, 800, 600);
        assert_eq!(corner.origin, PINHOLE);
        assert_eq!(corner.direction, Vec3::new(-1.0, -1.0, -2.0));

        let center = primary_ray(400, 300, 800, 600);
        assert_eq!(center.direction, Vec3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn test_last_pixel_stays_below_one() {
        let ray = primary_ray(7, 3, 8, 4);
        assert_eq!(ray.direction, Vec3::new(0.75, 0.5, -2.0));
    }

    #[test]
    fn test_primary_rays_cover_image_once() {
        let rays: Vec<PixelRay> = primary_rays(5, 3).collect();
        assert_eq!(rays.len(), 15);

        let mut seen = std::collections::HashSet::new();
        for r in &rays {
            assert!(r.x < 5 && r.y < 3);
            assert!(seen.insert((r.x, r.y)));
            assert_eq!(r.ray, primary_ray(r.x, r.y, 5, 3));
        }
    }
}
