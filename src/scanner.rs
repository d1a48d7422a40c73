//! Per-face scanning against a calibrated reference table

use image::RgbImage;
use log::debug;

use crate::assemble::FaceScan;
use crate::calibration::ReferenceTable;
use crate::classify::classify_with_distance;
use crate::constants::facelets::CENTER_INDEX;
use crate::error::{Result, ScanError};
use crate::faces::Face;
use crate::geometry;
use crate::sampler;

/// Classifies the facelets of one face per frame
///
/// Holds the read-only reference table produced by calibration. The center
/// region is never classified: its color is known from the face being
/// presented.
pub struct FaceScanner {
    table: ReferenceTable,
}

impl FaceScanner {
    /// Create a scanner over a calibrated table
    ///
    /// # Errors
    ///
    /// Returns `ScanError::EmptyTable` if the table has no entries; a scan
    /// attempt without calibration data must abort up front.
    pub fn new(table: ReferenceTable) -> Result<Self> {
        if table.is_empty() {
            return Err(ScanError::EmptyTable);
        }
        Ok(Self { table })
    }

    /// Reference table in use
    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// Classify the eight non-center facelets of `face` from one frame
    ///
    /// # Errors
    ///
    /// Geometry and sampling errors (`InvalidFrame`, `EmptyRegion`) abort
    /// only this frame; the operator recaptures and retries.
    pub fn scan_face(&self, frame: &RgbImage, face: Face) -> Result<FaceScan> {
        let regions = geometry::regions(frame.width(), frame.height())?;

        let mut labels = Vec::with_capacity(regions.len());
        for (idx, region) in regions.iter().enumerate() {
            if idx == CENTER_INDEX {
                labels.push(face.center_color());
                continue;
            }
            let sample = sampler::sample(frame, *region)?;
            let (color, distance) = classify_with_distance(&sample, &self.table)?;
            debug!(
                "face {} facelet {}: {} (distance {:.1})",
                face, idx, color, distance
            );
            labels.push(color);
        }

        Ok(FaceScan::new(face, labels))
    }

    /// Sample and classify the eight non-center regions for calibration use
    ///
    /// Same sampling path as [`scan_face`](Self::scan_face) but without
    /// labels, for callers that only need the raw samples.
    pub fn sample_facelets(frame: &RgbImage) -> Result<Vec<crate::sampler::ColorSample>> {
        let regions = geometry::regions(frame.width(), frame.height())?;
        regions
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != CENTER_INDEX)
            .map(|(_, region)| sampler::sample(frame, *region))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::ReferenceEntry;
    use crate::faces::CubeColor;
    use image::Rgb;

    fn white_table() -> ReferenceTable {
        let mut table = ReferenceTable::new();
        table.insert(
            CubeColor::White,
            ReferenceEntry {
                lower: [240, 120, 120],
                upper: [255, 136, 136],
                mean: [254.0, 128.0, 128.0],
            },
        );
        table.insert(
            CubeColor::Blue,
            ReferenceEntry {
                lower: [70, 130, 50],
                upper: [90, 150, 70],
                mean: [80.0, 140.0, 60.0],
            },
        );
        table
    }

    #[test]
    fn test_scanner_rejects_empty_table() {
        assert!(matches!(
            FaceScanner::new(ReferenceTable::new()),
            Err(ScanError::EmptyTable)
        ));
    }

    #[test]
    fn test_scan_face_solid_white_frame() {
        let scanner = FaceScanner::new(white_table()).unwrap();
        let frame = RgbImage::from_pixel(96, 96, Rgb([255, 255, 255]));

        let scan = scanner.scan_face(&frame, Face::Back).unwrap();
        assert_eq!(scan.labels().len(), 9);
        // Center comes from the face identity, not classification
        assert_eq!(scan.labels()[CENTER_INDEX], Face::Back.center_color());
        for (idx, label) in scan.labels().iter().enumerate() {
            if idx != CENTER_INDEX {
                assert_eq!(*label, CubeColor::White);
            }
        }
    }

    #[test]
    fn test_scan_face_degenerate_frame() {
        let scanner = FaceScanner::new(white_table()).unwrap();
        let frame = RgbImage::new(2, 2);
        assert!(matches!(
            scanner.scan_face(&frame, Face::Up),
            Err(ScanError::InvalidFrame { .. })
        ));
    }

    #[test]
    fn test_sample_facelets_skips_center() {
        let frame = RgbImage::from_pixel(96, 96, Rgb([128, 128, 128]));
        let samples = FaceScanner::sample_facelets(&frame).unwrap();
        assert_eq!(samples.len(), 8);
    }
}
