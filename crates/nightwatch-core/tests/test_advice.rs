use nightwatch_core::advice::recommendations;
use nightwatch_core::report::{
    BrightnessFeature, BrightnessStatus, DominantColor, EnvironmentClass, EnvironmentDetail,
    EnvironmentFeature, StructureClass, StructureDetail, StructureFeature,
};

fn brightness(status: BrightnessStatus) -> BrightnessFeature {
    BrightnessFeature {
        level: 50.0,
        status,
        description: String::new(),
    }
}

fn environment(classification: EnvironmentClass) -> EnvironmentFeature {
    EnvironmentFeature {
        detail: EnvironmentDetail::ColorTally {
            dominant: DominantColor::Gray,
        },
        classification,
    }
}

fn structure(classification: StructureClass) -> StructureFeature {
    StructureFeature {
        detail: StructureDetail::GridEdges {
            vertical_edges: 0,
            horizontal_edges: 0,
        },
        classification,
    }
}

#[test]
fn test_worst_case_ordering() {
    // Dark contributes two advisories, then environment, then structure.
    let advisories = recommendations(
        &brightness(BrightnessStatus::Dark),
        &environment(EnvironmentClass::IndoorCorridor),
        &structure(StructureClass::CorridorLike),
    );
    assert_eq!(advisories.len(), 4);
    assert!(advisories[0].contains("flashlight"));
    assert!(advisories[1].contains("companion"));
    assert!(advisories[2].contains("emergency exit"));
    assert!(advisories[3].contains("sightlines"));
}

#[test]
fn test_dim_contributes_one_advisory() {
    let advisories = recommendations(
        &brightness(BrightnessStatus::Dim),
        &environment(EnvironmentClass::Outdoor),
        &structure(StructureClass::OpenSpace),
    );
    assert_eq!(advisories.len(), 1);
    assert!(advisories[0].contains("dim"));
}

#[test]
fn test_affirmation_when_no_concern_triggers() {
    let advisories = recommendations(
        &brightness(BrightnessStatus::Bright),
        &environment(EnvironmentClass::Outdoor),
        &structure(StructureClass::OpenSpace),
    );
    assert_eq!(advisories.len(), 1);
    assert!(advisories[0].contains("appears safe"));
}

#[test]
fn test_never_empty() {
    use BrightnessStatus::*;
    use EnvironmentClass::*;
    use StructureClass::*;

    for b in [Dark, Dim, Bright] {
        for e in [IndoorCorridor, Outdoor] {
            for s in [CorridorLike, OpenSpace] {
                let advisories = recommendations(&brightness(b), &environment(e), &structure(s));
                assert!(!advisories.is_empty(), "{b:?}/{e:?}/{s:?}");
            }
        }
    }
}

#[test]
fn test_outdoor_has_no_exit_advisory() {
    let advisories = recommendations(
        &brightness(BrightnessStatus::Dark),
        &environment(EnvironmentClass::Outdoor),
        &structure(StructureClass::OpenSpace),
    );
    assert!(advisories.iter().all(|a| !a.contains("emergency exit")));
}
