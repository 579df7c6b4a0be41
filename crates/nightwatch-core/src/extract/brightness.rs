use ndarray::Array2;

use crate::consts::{
    BRIGHTNESS_DARK_MAX, BRIGHTNESS_DIM_MAX, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R,
    PIXEL_SAMPLE_STRIDE,
};
use crate::error::{Result, ScanError};
use crate::frame::{Frame, BYTES_PER_PIXEL};
use crate::report::{BrightnessFeature, BrightnessStatus};

/// Classify a brightness level (0-100) into a status bucket.
pub fn classify_level(level: f64) -> BrightnessStatus {
    if level < BRIGHTNESS_DARK_MAX {
        BrightnessStatus::Dark
    } else if level < BRIGHTNESS_DIM_MAX {
        BrightnessStatus::Dim
    } else {
        BrightnessStatus::Bright
    }
}

fn describe(status: BrightnessStatus) -> String {
    match status {
        BrightnessStatus::Dark => "Very low light".to_string(),
        BrightnessStatus::Dim => "Dim lighting".to_string(),
        BrightnessStatus::Bright => "Well lit".to_string(),
    }
}

fn feature_from_level(level: f64) -> BrightnessFeature {
    let status = classify_level(level);
    BrightnessFeature {
        level,
        status,
        description: describe(status),
    }
}

/// Basic strategy: mean BT.601 luminance over every 4th pixel, scaled to
/// [0, 100].
///
/// Fails with `InvalidFrame` when the frame yields zero samples; passing a
/// non-empty frame is a caller precondition.
pub fn extract_brightness(frame: &Frame) -> Result<BrightnessFeature> {
    let mut sum = 0.0f64;
    let mut count = 0usize;

    for px in frame
        .pixels()
        .chunks_exact(BYTES_PER_PIXEL)
        .step_by(PIXEL_SAMPLE_STRIDE)
    {
        let y = LUMINANCE_R * px[0] as f32 + LUMINANCE_G * px[1] as f32 + LUMINANCE_B * px[2] as f32;
        sum += (y / 255.0) as f64;
        count += 1;
    }

    if count == 0 {
        return Err(ScanError::InvalidFrame {
            width: frame.width(),
            height: frame.height(),
        });
    }

    Ok(feature_from_level(sum / count as f64 * 100.0))
}

/// Accelerated strategy: global mean of a precomputed luminance plane.
///
/// Produces the same statistic as [`extract_brightness`] within floating-point
/// tolerance on the same frame.
pub fn brightness_from_plane(plane: &Array2<f32>) -> Result<BrightnessFeature> {
    let n = plane.len();
    if n == 0 {
        return Err(ScanError::InvalidFrame {
            width: plane.ncols() as u32,
            height: plane.nrows() as u32,
        });
    }

    let sum: f64 = plane.iter().map(|&v| v as f64).sum();
    Ok(feature_from_level(sum / n as f64 * 100.0))
}
