//! Image output: the pixel sink contract and an in-memory buffer.
//!
//! The renderer only ever writes through [`ImageTarget`]; [`ImageBuffer`] is
//! the in-memory implementation used by the session and the CLI.

use std::path::Path;

use prism_core::Color;
use thiserror::Error;

/// Errors that can occur while writing an image to disk.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Pixel data does not fill a {width}x{height} image")]
    BufferSize { width: u32, height: u32 },
}

/// Destination for rendered pixels.
pub trait ImageTarget {
    /// Current (width, height) in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Reset every pixel before a full render.
    fn initialize(&mut self);

    /// Store a color. Coordinates must be inside `dimensions()`.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// Encode a linear channel with the sRGB transfer curve.
#[inline]
pub fn linear_to_srgb(linear: f32) -> f32 {
    let linear = linear.clamp(0.0, 1.0);
    if linear <= 0.003_130_8 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Convert a linear color to 8-bit sRGB RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let to_byte = |c: f32| (255.0 * linear_to_srgb(c)).round() as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z), 255]
}

/// Row-major offset of (x, y), computed in `usize` so large images don't wrap.
#[inline]
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Number of pixels in a `width` x `height` image.
#[inline]
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Simple image buffer for storing render output.
///
/// Pixels are stored row-major with row 0 at the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; pixel_count(width, height)],
        }
    }

    /// Change the size. Contents are cleared to black.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![Color::ZERO; pixel_count(width, height)];
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[pixel_index(self.width, x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[pixel_index(self.width, x, y)] = color;
    }

    /// Convert to RGBA bytes, top row first.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(pixel_count(self.width, self.height) * 4);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                bytes.extend_from_slice(&color_to_rgba(self.get(x, y)));
            }
        }
        bytes
    }

    /// Write the image as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), OutputError> {
        let rgba = image::RgbaImage::from_raw(self.width, self.height, self.to_rgba8())
            .ok_or(OutputError::BufferSize {
                width: self.width,
                height: self.height,
            })?;
        rgba.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

impl ImageTarget for ImageBuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn initialize(&mut self) {
        self.pixels.fill(Color::ZERO);
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.set(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_to_srgb() {
        assert_eq!(linear_to_srgb(0.0), 0.0);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-6);
        assert!((linear_to_srgb(0.5) - 0.7354).abs() < 1e-3);
        // Out-of-range intensities clamp
        assert!((linear_to_srgb(4.0) - 1.0).abs() < 1e-6);
        assert_eq!(linear_to_srgb(-1.0), 0.0);
    }

    #[test]
    fn test_color_to_rgba() {
        assert_eq!(color_to_rgba(Color::ZERO), [0, 0, 0, 255]);
        assert_eq!(color_to_rgba(Color::new(1.0, 2.0, 0.0)), [255, 255, 0, 255]);
    }

    #[test]
    fn test_pixel_index_large_dimensions() {
        // 65536 x 65536 overflows u32 arithmetic
        assert_eq!(pixel_count(65536, 65536), 1usize << 32);
        assert_eq!(pixel_index(65536, 65535, 65535), (1usize << 32) - 1);
        assert_eq!(pixel_index(4, 3, 2), 11);
    }

    #[test]
    fn test_set_get_initialize() {
        let mut image = ImageBuffer::new(4, 3);
        image.set_pixel(3, 2, Color::ONE);
        assert_eq!(image.get(3, 2), Color::ONE);
        assert_eq!(image.dimensions(), (4, 3));

        image.initialize();
        assert!(image.pixels.iter().all(|&p| p == Color::ZERO));
    }

    #[test]
    fn test_resize() {
        let mut image = ImageBuffer::new(2, 2);
        image.set(1, 1, Color::ONE);
        image.resize(5, 4);
        assert_eq!(image.pixels.len(), 20);
        assert_eq!(image.get(4, 3), Color::ZERO);
    }

    #[test]
    fn test_to_rgba8_puts_bottom_row_last() {
        let mut image = ImageBuffer::new(1, 2);
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));
        image.set(0, 1, Color::new(0.0, 0.0, 1.0));

        let bytes = image.to_rgba8();
        assert_eq!(&bytes[0..4], &[0, 0, 255, 255]);
        assert_eq!(&bytes[4..8], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_save_png() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(1, 1, Color::new(0.2, 0.4, 0.6));

        let path = std::env::temp_dir().join(format!("prism_save_png_{}.png", std::process::id()));
        image.save_png(&path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        // Row 1 is the top row in the file
        assert_eq!(decoded.get_pixel(1, 0).0, color_to_rgba(Color::new(0.2, 0.4, 0.6)));
        std::fs::remove_file(&path).ok();
    }
}
