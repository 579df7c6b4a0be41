use crate::contour::find_contours;
use crate::edge::detect_edges;
use crate::error::{Result, ScanError};
use crate::extract::{brightness, environment, structure};
use crate::frame::Frame;
use crate::report::{BrightnessFeature, EnvironmentFeature, FeatureSet, ScanMethod, StructureFeature};

/// Image-processing strategy: edge detection and contour analysis over a
/// full luminance plane. Selected only once the capability cell reports the
/// backend ready.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceleratedStrategy;

impl AcceleratedStrategy {
    fn check_frame(frame: &Frame) -> Result<()> {
        if frame.is_empty() {
            return Err(ScanError::InvalidFrame {
                width: frame.width(),
                height: frame.height(),
            });
        }
        Ok(())
    }
}

impl super::ExtractionStrategy for AcceleratedStrategy {
    fn method(&self) -> ScanMethod {
        ScanMethod::Accelerated
    }

    fn extract_brightness(&self, frame: &Frame) -> Result<BrightnessFeature> {
        Self::check_frame(frame)?;
        brightness::brightness_from_plane(&frame.luminance_plane())
    }

    fn extract_environment(&self, frame: &Frame) -> Result<EnvironmentFeature> {
        Self::check_frame(frame)?;
        let edge_map = detect_edges(&frame.luminance_plane());
        let contours = find_contours(&edge_map.mask);
        Ok(environment::environment_from_contours(
            &contours,
            frame.pixel_count(),
        ))
    }

    fn extract_structure(&self, frame: &Frame) -> Result<StructureFeature> {
        Self::check_frame(frame)?;
        let edge_map = detect_edges(&frame.luminance_plane());
        Ok(structure::structure_from_edge_map(&edge_map))
    }

    // One luminance plane and one edge map are shared across all three
    // features when the whole set is requested.
    fn extract_features(&self, frame: &Frame) -> Result<FeatureSet> {
        Self::check_frame(frame)?;
        let plane = frame.luminance_plane();
        let brightness = brightness::brightness_from_plane(&plane)?;

        let edge_map = detect_edges(&plane);
        let contours = find_contours(&edge_map.mask);
        let environment = environment::environment_from_contours(&contours, frame.pixel_count());
        let structure = structure::structure_from_edge_map(&edge_map);

        Ok(FeatureSet {
            brightness,
            environment,
            structure,
        })
    }
}
