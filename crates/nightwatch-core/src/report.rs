use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Illumination class derived from mean luminance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrightnessStatus {
    Dark,
    Dim,
    Bright,
}

impl std::fmt::Display for BrightnessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Dim => write!(f, "dim"),
            Self::Bright => write!(f, "bright"),
        }
    }
}

/// Illumination measurement for a frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BrightnessFeature {
    /// Mean luminance scaled to [0, 100].
    pub level: f64,
    pub status: BrightnessStatus,
    /// Human-readable summary of the lighting conditions.
    pub description: String,
}

/// Dominant color buckets used by the basic environment extractor.
///
/// Enumeration order is the tie-break order for equal tallies: the first
/// variant with the highest count wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DominantColor {
    Red,
    Green,
    Blue,
    Gray,
    Other,
}

impl DominantColor {
    /// All buckets in tally (and tie-break) order.
    pub const ALL: [DominantColor; 5] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Gray,
        Self::Other,
    ];
}

impl std::fmt::Display for DominantColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
            Self::Gray => write!(f, "gray"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Environment class for scoring purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvironmentClass {
    IndoorCorridor,
    Outdoor,
}

/// Strategy-specific evidence behind the environment classification.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum EnvironmentDetail {
    /// Basic strategy: dominant color over sampled pixels.
    ColorTally { dominant: DominantColor },
    /// Accelerated strategy: corridor-shaped vs. open contour counts.
    ContourShapes {
        indoor_indicators: u32,
        outdoor_indicators: u32,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnvironmentFeature {
    pub detail: EnvironmentDetail,
    pub classification: EnvironmentClass,
}

/// Structural class for scoring purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureClass {
    CorridorLike,
    OpenSpace,
}

/// Edge density buckets reported by the accelerated structure extractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeComplexity {
    Low,
    Medium,
    High,
}

/// Strategy-specific evidence behind the structure classification.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum StructureDetail {
    /// Basic strategy: grid-walk edge counts by edge orientation.
    GridEdges {
        vertical_edges: u32,
        horizontal_edges: u32,
    },
    /// Accelerated strategy: edge-pixel ratio over the whole frame.
    EdgeDensity {
        edge_ratio: f64,
        complexity: EdgeComplexity,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StructureFeature {
    pub detail: StructureDetail,
    pub classification: StructureClass,
}

/// Which extraction path actually produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanMethod {
    Accelerated,
    Basic,
    Error,
}

impl std::fmt::Display for ScanMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accelerated => write!(f, "accelerated"),
            Self::Basic => write!(f, "basic"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// The three features extracted from one frame by one strategy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeatureSet {
    pub brightness: BrightnessFeature,
    pub environment: EnvironmentFeature,
    pub structure: StructureFeature,
}

/// Complete outcome of one scan. Constructed once, immutable afterward,
/// owned by the caller.
///
/// The score and recommendations are always present, even when a failed
/// capture left no features to report (`method == Error`, `features` absent,
/// score defaulted to 50).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Extracted features; absent only on a failed scan.
    pub features: Option<FeatureSet>,
    /// Bounded additive safety score, always in [0, 100].
    pub safety_score: u8,
    /// Ordered advisories; never empty.
    pub recommendations: Vec<String>,
    /// Which strategy produced this result, for auditability.
    pub method: ScanMethod,
    pub timestamp: SystemTime,
}

impl AnalysisResult {
    pub fn brightness(&self) -> Option<&BrightnessFeature> {
        self.features.as_ref().map(|f| &f.brightness)
    }

    pub fn environment(&self) -> Option<&EnvironmentFeature> {
        self.features.as_ref().map(|f| &f.environment)
    }

    pub fn structure(&self) -> Option<&StructureFeature> {
        self.features.as_ref().map(|f| &f.structure)
    }
}
