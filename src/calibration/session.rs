//! Sample accumulation across an interactive calibration run
//!
//! A [`CalibrationSession`] walks the fixed color sequence, collecting the
//! samples of each confirmed capture. Nothing is persisted until
//! [`CalibrationSession::finalize`] succeeds; dropping the session discards
//! everything, so an aborted calibration never leaves a partial table.

use log::warn;
use std::collections::BTreeMap;

use crate::constants::calibration::{CHANNEL_MAX, CHANNEL_MIN, STD_MULTIPLIER};
use crate::error::{Result, ScanError};
use crate::faces::{CubeColor, CALIBRATION_COLOR_ORDER};
use crate::sampler::ColorSample;

use super::table::{ReferenceEntry, ReferenceTable};

/// Accumulator for calibration samples, one run per reference table
pub struct CalibrationSession {
    samples: BTreeMap<CubeColor, Vec<ColorSample>>,
    cursor: usize,
    std_multiplier: f32,
}

impl Default for CalibrationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalibrationSession {
    /// Create a session with the default range multiplier
    pub fn new() -> Self {
        Self::with_multiplier(STD_MULTIPLIER)
    }

    /// Create a session with a custom `mean ± k*std` multiplier
    pub fn with_multiplier(std_multiplier: f32) -> Self {
        Self {
            samples: BTreeMap::new(),
            cursor: 0,
            std_multiplier,
        }
    }

    /// Color the next capture will be recorded against, `None` once the
    /// sequence is complete
    pub fn current_color(&self) -> Option<CubeColor> {
        CALIBRATION_COLOR_ORDER.get(self.cursor).copied()
    }

    /// Whether every color in the sequence has been visited
    pub fn is_complete(&self) -> bool {
        self.cursor >= CALIBRATION_COLOR_ORDER.len()
    }

    /// Record one confirmed capture for the current color and advance
    ///
    /// Returns the color the capture was recorded against, or `None` if the
    /// sequence was already complete (the samples are then discarded).
    pub fn record_capture(
        &mut self,
        samples: impl IntoIterator<Item = ColorSample>,
    ) -> Option<CubeColor> {
        let color = self.current_color()?;
        self.samples.entry(color).or_default().extend(samples);
        self.cursor += 1;
        Some(color)
    }

    /// Record an additional capture for a specific color without advancing
    pub fn record_capture_for(
        &mut self,
        color: CubeColor,
        samples: impl IntoIterator<Item = ColorSample>,
    ) {
        self.samples.entry(color).or_default().extend(samples);
    }

    /// Number of samples accumulated for a color so far
    pub fn sample_count(&self, color: CubeColor) -> usize {
        self.samples.get(&color).map_or(0, Vec::len)
    }

    /// Derive the reference table from the accumulated samples
    ///
    /// Per color: per-channel sample mean and population standard deviation,
    /// with `lower`/`upper` at `mean ∓ k*std`, clamped to the channel range
    /// and rounded. A color with zero samples is omitted from the table (and
    /// logged) rather than failing the run.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::EmptyTable` if no color collected any samples.
    pub fn finalize(self) -> Result<ReferenceTable> {
        let mut table = ReferenceTable::new();

        for color in CALIBRATION_COLOR_ORDER {
            let samples = self.samples.get(&color).map_or(&[][..], Vec::as_slice);
            if samples.is_empty() {
                warn!(
                    "{}; omitting from table",
                    ScanError::InsufficientSamples {
                        label: color.label().to_string(),
                    }
                );
                continue;
            }
            table.insert(color, derive_entry(samples, self.std_multiplier));
        }

        if table.is_empty() {
            return Err(ScanError::EmptyTable);
        }
        Ok(table)
    }
}

/// Compute mean and accept-range for one color's samples
fn derive_entry(samples: &[ColorSample], k: f32) -> ReferenceEntry {
    let mean = channel_mean(samples);
    let std = channel_std(samples, mean);

    let mut lower = [0u8; 3];
    let mut upper = [0u8; 3];
    for i in 0..3 {
        lower[i] = clamp_channel(mean[i] - k * std[i]);
        upper[i] = clamp_channel(mean[i] + k * std[i]);
    }

    ReferenceEntry { lower, upper, mean }
}

fn channel_mean(samples: &[ColorSample]) -> [f32; 3] {
    let n = samples.len() as f64;
    let mut sums = [0.0f64; 3];
    for s in samples {
        for (sum, c) in sums.iter_mut().zip(s.channels()) {
            *sum += c as f64;
        }
    }
    [
        (sums[0] / n) as f32,
        (sums[1] / n) as f32,
        (sums[2] / n) as f32,
    ]
}

/// Population standard deviation per channel
fn channel_std(samples: &[ColorSample], mean: [f32; 3]) -> [f32; 3] {
    let n = samples.len() as f64;
    let mut sums = [0.0f64; 3];
    for s in samples {
        for (sum, (c, m)) in sums.iter_mut().zip(s.channels().iter().zip(mean)) {
            let d = (*c - m) as f64;
            *sum += d * d;
        }
    }
    [
        (sums[0] / n).sqrt() as f32,
        (sums[1] / n).sqrt() as f32,
        (sums[2] / n).sqrt() as f32,
    ]
}

fn clamp_channel(value: f32) -> u8 {
    value.clamp(CHANNEL_MIN, CHANNEL_MAX).round() as u8
}
