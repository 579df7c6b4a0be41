use image::RgbaImage;
use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{Result, ScanError};

/// Number of bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A single captured camera frame.
///
/// Pixel data is raw RGBA, row-major, `width * height * 4` bytes. Frames are
/// immutable after construction and exclusively owned by the scan that
/// consumes them.
#[derive(Clone, Debug)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    /// Build a frame from a raw RGBA buffer.
    ///
    /// The buffer length must be exactly `width * height * 4`. Zero-dimension
    /// frames are constructible (with an empty buffer) but rejected later by
    /// the extractors.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(ScanError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a frame from a decoded `image` crate RGBA image.
    pub fn from_image(img: &RgbaImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            pixels: img.as_raw().clone(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// BT.601 luminance of one RGBA pixel on the 8-bit scale (0-255).
    pub fn luminance_at(&self, x: u32, y: u32) -> f32 {
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let r = self.pixels[idx] as f32;
        let g = self.pixels[idx + 1] as f32;
        let b = self.pixels[idx + 2] as f32;
        LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b
    }

    /// Convert the frame to a luminance plane, shape `(height, width)`,
    /// values in [0.0, 1.0].
    pub fn luminance_plane(&self) -> Array2<f32> {
        let h = self.height as usize;
        let w = self.width as usize;
        if h == 0 || w == 0 {
            return Array2::<f32>::zeros((h, w));
        }
        let row_bytes = w * BYTES_PER_PIXEL;

        let convert_row = |row: &[u8]| -> Vec<f32> {
            row.chunks_exact(BYTES_PER_PIXEL)
                .map(|px| {
                    (LUMINANCE_R * px[0] as f32
                        + LUMINANCE_G * px[1] as f32
                        + LUMINANCE_B * px[2] as f32)
                        / 255.0
                })
                .collect()
        };

        let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
            self.pixels.par_chunks_exact(row_bytes).map(convert_row).collect()
        } else {
            self.pixels.chunks_exact(row_bytes).map(convert_row).collect()
        };

        let mut plane = Array2::<f32>::zeros((h, w));
        for (row_idx, row) in rows.into_iter().enumerate() {
            for (col_idx, val) in row.into_iter().enumerate() {
                plane[[row_idx, col_idx]] = val;
            }
        }
        plane
    }
}
