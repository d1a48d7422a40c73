//! Calibrated reference table and its JSON persistence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, ScanError};
use crate::faces::CubeColor;
use crate::sampler::ColorSample;

/// Calibrated reference for one sticker color
///
/// `mean` is what classification uses; `lower`/`upper` describe the
/// `mean ± k*std` accept-range, clamped to the 0-255 channel scale. The
/// bounds are diagnostic only and never gate classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Lower accept-range bound per channel (L, a, b)
    pub lower: [u8; 3],
    /// Upper accept-range bound per channel (L, a, b)
    pub upper: [u8; 3],
    /// Mean channel values of the calibration samples (L, a, b)
    pub mean: [f32; 3],
}

impl ReferenceEntry {
    /// Check whether a sample falls inside the accept-range on all channels
    ///
    /// Diagnostic display only; a sample outside every range is still
    /// assigned its nearest mean at classification time.
    pub fn contains(&self, sample: &ColorSample) -> bool {
        sample
            .channels()
            .iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(c, (lo, hi))| *c >= *lo as f32 && *c <= *hi as f32)
    }
}

/// Mapping from sticker color to its calibrated reference
///
/// Backed by a `BTreeMap`, so iteration follows lexicographic label order;
/// classification tie-breaks inherit that fixed order. The schema carries no
/// version field and must match between calibration and classification use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceTable {
    entries: BTreeMap<CubeColor, ReferenceEntry>,
}

impl ReferenceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for a color
    pub fn insert(&mut self, color: CubeColor, entry: ReferenceEntry) {
        self.entries.insert(color, entry);
    }

    /// Look up the entry for a color
    pub fn get(&self, color: CubeColor) -> Option<&ReferenceEntry> {
        self.entries.get(&color)
    }

    /// Iterate entries in lexicographic label order
    pub fn iter(&self) -> impl Iterator<Item = (CubeColor, &ReferenceEntry)> {
        self.entries.iter().map(|(c, e)| (*c, e))
    }

    /// Number of calibrated colors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Colors from the full calibration sequence missing from this table
    pub fn missing_colors(&self) -> Vec<CubeColor> {
        crate::faces::CALIBRATION_COLOR_ORDER
            .iter()
            .copied()
            .filter(|c| !self.entries.contains_key(c))
            .collect()
    }

    /// Load a table from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScanError::table_io(format!("failed to read {}", path.display()), e))?;
        serde_json::from_str(&content)
            .map_err(|e| ScanError::table_io(format!("failed to parse {}", path.display()), e))
    }

    /// Save the table to a JSON file
    ///
    /// This is the calibration pipeline's sole mutation boundary; the file
    /// is written once and read in later sessions.
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ScanError::table_io("failed to serialize table", e))?;
        std::fs::write(path, json)
            .map_err(|e| ScanError::table_io(format!("failed to write {}", path.display()), e))
    }
}
