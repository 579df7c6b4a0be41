use crate::consts::{EDGE_RATIO_HIGH, EDGE_RATIO_MEDIUM, STRUCTURE_EDGE_DIFF, STRUCTURE_GRID_STEP};
use crate::edge::EdgeMap;
use crate::error::{Result, ScanError};
use crate::frame::Frame;
use crate::report::{EdgeComplexity, StructureClass, StructureDetail, StructureFeature};

/// Basic strategy: walk a coarse 10x10-pixel grid and count luminance steps
/// against the neighbor one grid step to the right and below.
///
/// A large difference toward the horizontal neighbor means a vertical edge
/// runs between them (and vice versa) — the counters are named for the
/// orientation of the edge detected, not the direction compared. More
/// vertical than horizontal edges reads as a corridor.
pub fn extract_structure(frame: &Frame) -> Result<StructureFeature> {
    if frame.is_empty() {
        return Err(ScanError::InvalidFrame {
            width: frame.width(),
            height: frame.height(),
        });
    }

    let step = STRUCTURE_GRID_STEP as u32;
    let mut vertical_edges = 0u32;
    let mut horizontal_edges = 0u32;

    let mut y = 0u32;
    while y + step < frame.height() {
        let mut x = 0u32;
        while x + step < frame.width() {
            let here = frame.luminance_at(x, y);
            let right = frame.luminance_at(x + step, y);
            let below = frame.luminance_at(x, y + step);

            if (here - right).abs() > STRUCTURE_EDGE_DIFF {
                vertical_edges += 1;
            }
            if (here - below).abs() > STRUCTURE_EDGE_DIFF {
                horizontal_edges += 1;
            }
            x += step;
        }
        y += step;
    }

    let classification = if vertical_edges > horizontal_edges {
        StructureClass::CorridorLike
    } else {
        StructureClass::OpenSpace
    };

    Ok(StructureFeature {
        detail: StructureDetail::GridEdges {
            vertical_edges,
            horizontal_edges,
        },
        classification,
    })
}

/// Accelerated strategy: classify structure from the edge-pixel ratio of a
/// precomputed edge map.
pub fn structure_from_edge_map(edge_map: &EdgeMap) -> StructureFeature {
    let edge_ratio = edge_map.edge_ratio();

    let complexity = if edge_ratio > EDGE_RATIO_HIGH {
        EdgeComplexity::High
    } else if edge_ratio > EDGE_RATIO_MEDIUM {
        EdgeComplexity::Medium
    } else {
        EdgeComplexity::Low
    };

    let classification = if edge_ratio > EDGE_RATIO_HIGH {
        StructureClass::CorridorLike
    } else {
        StructureClass::OpenSpace
    };

    StructureFeature {
        detail: StructureDetail::EdgeDensity {
            edge_ratio,
            complexity,
        },
        classification,
    }
}
