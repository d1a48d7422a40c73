//! Fixed ratios, calibration parameters and facelet index tables
//!
//! All magic numbers of the scanning pipeline live here: the grid layout
//! ratios, the calibration range multiplier and the permutation applied when
//! reordering facelets for the solver.

/// Grid layout ratios for the on-screen 3x3 sampling overlay
pub mod grid {
    /// Grid side relative to `min(frame_width, frame_height)`
    pub const GRID_SIZE_RATIO: f32 = 0.5;

    /// Sampling square side relative to one grid cell
    pub const INNER_SIZE_RATIO: f32 = 0.5;

    /// Cells per grid axis
    pub const GRID_DIM: u32 = 3;
}

/// Statistical calibration parameters
pub mod calibration {
    /// Accept-range half-width in standard deviations (`mean ± k * std`)
    ///
    /// Generous on purpose: only the mean is used for classification, the
    /// range is diagnostic, so low false-rejection beats tight bounds.
    pub const STD_MULTIPLIER: f32 = 7.0;

    /// Lower bound of the byte-oriented Lab channel scale
    pub const CHANNEL_MIN: f32 = 0.0;

    /// Upper bound of the byte-oriented Lab channel scale
    pub const CHANNEL_MAX: f32 = 255.0;

    /// Non-center samples contributed by one confirmed capture
    pub const SAMPLES_PER_CAPTURE: usize = 8;
}

/// Facelet counting and ordering
pub mod facelets {
    /// Facelets per face
    pub const PER_FACE: usize = 9;

    /// Faces per cube
    pub const FACE_COUNT: usize = 6;

    /// Length of the assembled solver input string
    pub const STATE_LEN: usize = PER_FACE * FACE_COUNT;

    /// Index of the center facelet within a raster-ordered face
    pub const CENTER_INDEX: usize = 4;

    /// Raster order (row-major, top-left first) to the solver's facelet
    /// traversal order for one face. Index 4 (the center) is fixed.
    pub const RASTER_TO_SOLVER: [usize; PER_FACE] = [2, 1, 0, 5, 4, 3, 8, 7, 6];
}
