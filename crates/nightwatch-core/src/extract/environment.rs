use crate::consts::{
    CONTOUR_ASPECT_HIGH, CONTOUR_ASPECT_LOW, CONTOUR_MIN_AREA_FRACTION, GRAY_CHANNEL_SPREAD,
    PIXEL_SAMPLE_STRIDE,
};
use crate::contour::Contour;
use crate::error::{Result, ScanError};
use crate::frame::{Frame, BYTES_PER_PIXEL};
use crate::report::{DominantColor, EnvironmentClass, EnvironmentDetail, EnvironmentFeature};

/// Bucket one RGB pixel into a dominant-color class.
///
/// Low channel spread means gray; otherwise a channel must strictly dominate
/// both others to claim the pixel.
pub fn classify_pixel(r: u8, g: u8, b: u8) -> DominantColor {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max - min < GRAY_CHANNEL_SPREAD {
        DominantColor::Gray
    } else if r > g && r > b {
        DominantColor::Red
    } else if g > r && g > b {
        DominantColor::Green
    } else if b > r && b > g {
        DominantColor::Blue
    } else {
        DominantColor::Other
    }
}

/// Basic strategy: tally sampled pixels into color buckets and classify the
/// environment from the dominant bucket.
///
/// Ties are broken by the fixed bucket order in [`DominantColor::ALL`] — the
/// first bucket with the highest tally wins. Gray dominance reads as an
/// indoor corridor; everything else as outdoor.
pub fn extract_environment(frame: &Frame) -> Result<EnvironmentFeature> {
    let mut tally = [0u32; DominantColor::ALL.len()];
    let mut sampled = 0usize;

    for px in frame
        .pixels()
        .chunks_exact(BYTES_PER_PIXEL)
        .step_by(PIXEL_SAMPLE_STRIDE)
    {
        let bucket = classify_pixel(px[0], px[1], px[2]);
        let idx = DominantColor::ALL
            .iter()
            .position(|c| *c == bucket)
            .unwrap_or(DominantColor::ALL.len() - 1);
        tally[idx] += 1;
        sampled += 1;
    }

    if sampled == 0 {
        return Err(ScanError::InvalidFrame {
            width: frame.width(),
            height: frame.height(),
        });
    }

    let mut dominant = DominantColor::ALL[0];
    let mut best = tally[0];
    for (color, &count) in DominantColor::ALL.iter().zip(&tally).skip(1) {
        // Strictly greater: earlier buckets win ties.
        if count > best {
            dominant = *color;
            best = count;
        }
    }

    let classification = if dominant == DominantColor::Gray {
        EnvironmentClass::IndoorCorridor
    } else {
        EnvironmentClass::Outdoor
    };

    Ok(EnvironmentFeature {
        detail: EnvironmentDetail::ColorTally { dominant },
        classification,
    })
}

/// Accelerated strategy: classify the environment from contour shapes.
///
/// Contours covering more than 10% of the frame vote: elongated bounding
/// boxes (aspect ratio > 2 or < 0.5) read as corridor walls, squarish ones as
/// open space.
pub fn environment_from_contours(contours: &[Contour], frame_area: usize) -> EnvironmentFeature {
    let min_area = frame_area as f64 * CONTOUR_MIN_AREA_FRACTION;
    let mut indoor_indicators = 0u32;
    let mut outdoor_indicators = 0u32;

    for contour in contours {
        if (contour.area as f64) <= min_area {
            continue;
        }
        let aspect = contour.aspect_ratio();
        if aspect > CONTOUR_ASPECT_HIGH || aspect < CONTOUR_ASPECT_LOW {
            indoor_indicators += 1;
        } else {
            outdoor_indicators += 1;
        }
    }

    let classification = if indoor_indicators > outdoor_indicators {
        EnvironmentClass::IndoorCorridor
    } else {
        EnvironmentClass::Outdoor
    };

    EnvironmentFeature {
        detail: EnvironmentDetail::ContourShapes {
            indoor_indicators,
            outdoor_indicators,
        },
        classification,
    }
}
