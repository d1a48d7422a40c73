//! Nearest-centroid color classification
//!
//! A sample is assigned the color whose calibrated mean is closest in
//! Euclidean distance. The calibrated accept-ranges are deliberately not
//! consulted: a sample outside every range is still assigned its nearest
//! mean, which keeps classification robust under lighting drift.

use crate::calibration::ReferenceTable;
use crate::error::{Result, ScanError};
use crate::faces::CubeColor;
use crate::sampler::ColorSample;

/// Classify a sample against the reference table
///
/// Ties are broken by table iteration order, which is fixed (lexicographic
/// by color label).
///
/// # Errors
///
/// Returns `ScanError::EmptyTable` if the table has no entries.
pub fn classify(sample: &ColorSample, table: &ReferenceTable) -> Result<CubeColor> {
    classify_with_distance(sample, table).map(|(color, _)| color)
}

/// Classify a sample and report the distance to the winning mean
///
/// The distance is useful for diagnostics (e.g. flagging captures far from
/// every calibrated color), but plays no role in acceptance.
pub fn classify_with_distance(
    sample: &ColorSample,
    table: &ReferenceTable,
) -> Result<(CubeColor, f32)> {
    let mut best: Option<(CubeColor, f32)> = None;

    for (color, entry) in table.iter() {
        let distance = sample.distance_to(entry.mean);
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((color, distance)),
        }
    }

    best.ok_or(ScanError::EmptyTable)
}
