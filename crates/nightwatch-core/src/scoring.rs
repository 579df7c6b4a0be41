use crate::consts::{
    SCORE_BASE, SCORE_CORRIDOR_BONUS, SCORE_DARK_PENALTY, SCORE_DIM_PENALTY, SCORE_INDOOR_PENALTY,
};
use crate::report::{
    BrightnessFeature, BrightnessStatus, EnvironmentClass, EnvironmentFeature, StructureClass,
    StructureFeature,
};

/// Combine extracted features into the bounded safety score.
///
/// The rule set is additive and order-independent; clamping to [0, 100] is
/// the final step. These constants are the scoring contract and must be
/// reproduced exactly by any reimplementation:
///
/// ```text
/// score = 100
/// Dark            -40    Dim -20
/// IndoorCorridor  -15
/// CorridorLike    +10
/// ```
pub fn safety_score(
    brightness: &BrightnessFeature,
    environment: &EnvironmentFeature,
    structure: &StructureFeature,
) -> u8 {
    let mut score = SCORE_BASE;

    match brightness.status {
        BrightnessStatus::Dark => score -= SCORE_DARK_PENALTY,
        BrightnessStatus::Dim => score -= SCORE_DIM_PENALTY,
        BrightnessStatus::Bright => {}
    }

    if environment.classification == EnvironmentClass::IndoorCorridor {
        score -= SCORE_INDOOR_PENALTY;
    }

    if structure.classification == StructureClass::CorridorLike {
        score += SCORE_CORRIDOR_BONUS;
    }

    score.clamp(0, 100) as u8
}
