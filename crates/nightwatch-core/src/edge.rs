use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::{
    EDGE_BLUR_SIGMA, EDGE_HIGH_THRESHOLD, EDGE_LOW_THRESHOLD, PARALLEL_PIXEL_THRESHOLD,
};

/// Binary edge map of a frame.
#[derive(Clone, Debug)]
pub struct EdgeMap {
    /// True where a pixel lies on a detected edge. Shape = (height, width).
    pub mask: Array2<bool>,
}

impl EdgeMap {
    /// Fraction of frame pixels that are edge pixels.
    pub fn edge_ratio(&self) -> f64 {
        let total = self.mask.len();
        if total == 0 {
            return 0.0;
        }
        let edges = self.mask.iter().filter(|&&v| v).count();
        edges as f64 / total as f64
    }
}

/// Detect edges in a luminance plane (values in [0, 1]).
///
/// Pipeline: Gaussian pre-blur -> Sobel gradient magnitude -> double
/// threshold with hysteresis. Thresholds are the fixed 50/150 pair on the
/// 8-bit scale; weak edge pixels survive only when 8-connected to a strong
/// one.
pub fn detect_edges(plane: &Array2<f32>) -> EdgeMap {
    let blurred = gaussian_blur(plane, EDGE_BLUR_SIGMA);
    let magnitude = sobel_magnitude(&blurred);
    EdgeMap {
        mask: hysteresis_threshold(&magnitude, EDGE_LOW_THRESHOLD, EDGE_HIGH_THRESHOLD),
    }
}

/// Separable Gaussian blur with clamped borders.
pub fn gaussian_blur(data: &Array2<f32>, sigma: f32) -> Array2<f32> {
    let kernel = gaussian_kernel(sigma);
    let horizontal = convolve_1d(data, &kernel, true);
    convolve_1d(&horizontal, &kernel, false)
}

fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil() as usize;
    let s2 = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..2 * radius + 1)
        .map(|i| {
            let x = i as f32 - radius as f32;
            (-x * x / s2).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

fn convolve_1d(data: &Array2<f32>, kernel: &[f32], along_rows: bool) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() as isize / 2;
    let mut result = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let offset = ki as isize - radius;
                let (src_row, src_col) = if along_rows {
                    (
                        row,
                        (col as isize + offset).clamp(0, w as isize - 1) as usize,
                    )
                } else {
                    (
                        (row as isize + offset).clamp(0, h as isize - 1) as usize,
                        col,
                    )
                };
                sum += data[[src_row, src_col]] * kv;
            }
            result[[row, col]] = sum;
        }
    }
    result
}

/// Sobel gradient magnitude on the 8-bit scale (input in [0, 1], output
/// roughly [0, 1443]). The 1-pixel border is zero.
pub fn sobel_magnitude(data: &Array2<f32>) -> Array2<f32> {
    let (h, w) = data.dim();
    let mut result = Array2::<f32>::zeros((h, w));
    if h < 3 || w < 3 {
        return result;
    }

    let magnitude_row = |row: usize| -> Vec<f32> {
        (1..w - 1)
            .map(|col| {
                let gx = -data[[row - 1, col - 1]] + data[[row - 1, col + 1]]
                    - 2.0 * data[[row, col - 1]]
                    + 2.0 * data[[row, col + 1]]
                    - data[[row + 1, col - 1]]
                    + data[[row + 1, col + 1]];
                let gy = -data[[row - 1, col - 1]]
                    - 2.0 * data[[row - 1, col]]
                    - data[[row - 1, col + 1]]
                    + data[[row + 1, col - 1]]
                    + 2.0 * data[[row + 1, col]]
                    + data[[row + 1, col + 1]];
                (gx * gx + gy * gy).sqrt() * 255.0
            })
            .collect()
    };

    let rows: Vec<(usize, Vec<f32>)> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (1..h - 1)
            .into_par_iter()
            .map(|row| (row, magnitude_row(row)))
            .collect()
    } else {
        (1..h - 1).map(|row| (row, magnitude_row(row))).collect()
    };

    for (row, values) in rows {
        for (i, val) in values.into_iter().enumerate() {
            result[[row, i + 1]] = val;
        }
    }
    result
}

/// Double threshold with hysteresis: strong pixels seed a flood fill that
/// keeps weak pixels 8-connected to them.
pub fn hysteresis_threshold(magnitude: &Array2<f32>, low: f32, high: f32) -> Array2<bool> {
    let (h, w) = magnitude.dim();
    let mut mask = Array2::<bool>::from_elem((h, w), false);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for row in 0..h {
        for col in 0..w {
            if magnitude[[row, col]] >= high && !mask[[row, col]] {
                mask[[row, col]] = true;
                stack.push((row, col));
            }
        }
    }

    while let Some((row, col)) = stack.pop() {
        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let nr = row as i64 + dr;
                let nc = col as i64 + dc;
                if nr < 0 || nc < 0 || nr >= h as i64 || nc >= w as i64 {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                if !mask[[nr, nc]] && magnitude[[nr, nc]] >= low {
                    mask[[nr, nc]] = true;
                    stack.push((nr, nc));
                }
            }
        }
    }

    mask
}
