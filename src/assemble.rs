//! Face and cube assembly
//!
//! Turns six per-face scans into the 54-character state string the solver
//! consumes. Two independent reorderings apply: within a face, raster order
//! becomes the solver's facelet traversal order
//! ([`RASTER_TO_SOLVER`](crate::constants::facelets::RASTER_TO_SOLVER));
//! across faces, capture order becomes the solver's face order. Center slots
//! are then overwritten with each face's canonical letter, which both pins
//! down the scan orientation and guards against center misclassification.

use crate::constants::facelets::{CENTER_INDEX, FACE_COUNT, PER_FACE, RASTER_TO_SOLVER};
use crate::error::{Result, ScanError};
use crate::faces::{CubeColor, Face, FACE_ORDER_SCAN, FACE_ORDER_SOLVER};

/// Classified labels of one face, in raster order
///
/// The center slot (index 4) is known a priori: it identifies the face
/// rather than being classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceScan {
    face: Face,
    labels: Vec<CubeColor>,
}

impl FaceScan {
    /// Create a face scan from raster-ordered labels
    pub fn new(face: Face, labels: Vec<CubeColor>) -> Self {
        Self { face, labels }
    }

    /// Face this scan belongs to
    pub fn face(&self) -> Face {
        self.face
    }

    /// Raster-ordered labels
    pub fn labels(&self) -> &[CubeColor] {
        &self.labels
    }
}

/// Assemble six face scans (in capture order) into the solver input string
///
/// # Errors
///
/// Returns `ScanError::IncompleteScan` if fewer than six faces were
/// provided, a scan-order face is missing or duplicated, or any face has
/// fewer than nine labels.
pub fn assemble(scans: &[FaceScan]) -> Result<String> {
    if scans.len() != FACE_COUNT {
        return Err(ScanError::incomplete(format!(
            "expected {} faces, got {}",
            FACE_COUNT,
            scans.len()
        )));
    }

    for face in FACE_ORDER_SCAN {
        match scans.iter().filter(|s| s.face == face).count() {
            1 => {}
            0 => {
                return Err(ScanError::incomplete(format!("face {} was not scanned", face)));
            }
            n => {
                return Err(ScanError::incomplete(format!(
                    "face {} was scanned {} times",
                    face, n
                )));
            }
        }
    }

    for scan in scans {
        if scan.labels.len() != PER_FACE {
            return Err(ScanError::incomplete(format!(
                "face {} has {} facelets, expected {}",
                scan.face,
                scan.labels.len(),
                PER_FACE
            )));
        }
    }

    let mut state = String::with_capacity(FACE_COUNT * PER_FACE);
    for face in FACE_ORDER_SOLVER {
        // count check above guarantees presence
        let scan = scans
            .iter()
            .find(|s| s.face == face)
            .ok_or_else(|| ScanError::incomplete(format!("face {} was not scanned", face)))?;

        for (slot, &raster_idx) in RASTER_TO_SOLVER.iter().enumerate() {
            if slot == CENTER_INDEX {
                state.push(face.letter());
            } else {
                state.push(scan.labels[raster_idx].face().letter());
            }
        }
    }

    Ok(state)
}

/// Undo the per-face facelet permutation of one 9-character block
///
/// Diagnostic helper for inspecting an assembled state face by face.
pub fn solver_block_to_raster(block: &[char; 9]) -> [char; 9] {
    let mut raster = ['\0'; 9];
    for (slot, &raster_idx) in RASTER_TO_SOLVER.iter().enumerate() {
        raster[raster_idx] = block[slot];
    }
    raster
}
