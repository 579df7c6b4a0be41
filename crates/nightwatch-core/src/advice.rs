use crate::report::{
    BrightnessFeature, BrightnessStatus, EnvironmentClass, EnvironmentFeature, StructureClass,
    StructureFeature,
};

/// Advisory shown when a scan fails and no features are available.
pub const FALLBACK_ADVISORY: &str =
    "Analysis unavailable. Stay aware of your surroundings and retry the scan.";

/// Generate ordered advisories for the extracted features.
///
/// Evaluation order is fixed (brightness, environment, structure) and
/// determines output order; severity does not reorder entries. The list is
/// never empty: an affirmative entry is appended when no concern triggers.
pub fn recommendations(
    brightness: &BrightnessFeature,
    environment: &EnvironmentFeature,
    structure: &StructureFeature,
) -> Vec<String> {
    let mut out = Vec::new();

    match brightness.status {
        BrightnessStatus::Dark => {
            out.push("Very dark environment. Use a flashlight or phone light.".to_string());
            out.push("Consider walking with a companion in low light.".to_string());
        }
        BrightnessStatus::Dim => {
            out.push("Lighting is dim. Stay alert to your surroundings.".to_string());
        }
        BrightnessStatus::Bright => {}
    }

    if environment.classification == EnvironmentClass::IndoorCorridor {
        out.push("Indoor corridor detected. Locate the nearest emergency exit.".to_string());
    }

    if structure.classification == StructureClass::CorridorLike {
        out.push("Narrow sightlines ahead. Keep a clear view of the path.".to_string());
    }

    if out.is_empty() {
        out.push("Environment appears safe. No immediate concerns detected.".to_string());
    }

    out
}
