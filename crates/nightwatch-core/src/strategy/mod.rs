mod accelerated;
mod basic;

pub use accelerated::AcceleratedStrategy;
pub use basic::BasicStrategy;

use crate::error::Result;
use crate::frame::Frame;
use crate::report::{BrightnessFeature, EnvironmentFeature, FeatureSet, ScanMethod, StructureFeature};

/// One of the two interchangeable extraction implementations.
///
/// Implementations are stateless over the frame: each call is a pure function
/// of the input, and extraction never panics on well-formed frames. An error
/// from any method on the accelerated path triggers the orchestrator's
/// transparent fallback to the basic strategy.
pub trait ExtractionStrategy: Send + Sync {
    /// Method tag recorded in results produced by this strategy.
    fn method(&self) -> ScanMethod;

    fn extract_brightness(&self, frame: &Frame) -> Result<BrightnessFeature>;

    fn extract_environment(&self, frame: &Frame) -> Result<EnvironmentFeature>;

    fn extract_structure(&self, frame: &Frame) -> Result<StructureFeature>;

    /// Extract all three features from one frame.
    ///
    /// The default composes the three single-feature calls; implementations
    /// may override it to share per-frame intermediates.
    fn extract_features(&self, frame: &Frame) -> Result<FeatureSet> {
        Ok(FeatureSet {
            brightness: self.extract_brightness(frame)?,
            environment: self.extract_environment(frame)?,
            structure: self.extract_structure(frame)?,
        })
    }
}
