use crate::error::Result;
use crate::extract::{brightness, environment, structure};
use crate::frame::Frame;
use crate::report::{BrightnessFeature, EnvironmentFeature, ScanMethod, StructureFeature};

use super::ExtractionStrategy;

/// Pure-heuristic strategy: strided pixel sampling and a coarse grid walk,
/// no image-processing backend required. Always available.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicStrategy;

impl ExtractionStrategy for BasicStrategy {
    fn method(&self) -> ScanMethod {
        ScanMethod::Basic
    }

    fn extract_brightness(&self, frame: &Frame) -> Result<BrightnessFeature> {
        brightness::extract_brightness(frame)
    }

    fn extract_environment(&self, frame: &Frame) -> Result<EnvironmentFeature> {
        environment::extract_environment(frame)
    }

    fn extract_structure(&self, frame: &Frame) -> Result<StructureFeature> {
        structure::extract_structure(frame)
    }
}
