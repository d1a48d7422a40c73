//! Facelet grid geometry
//!
//! Computes the pixel rectangles of the nine sampling squares of the 3x3
//! facelet grid from the frame dimensions alone. The grid occupies
//! [`grid::GRID_SIZE_RATIO`](crate::constants::grid::GRID_SIZE_RATIO) of the
//! smaller frame side and is centered; each sampling square occupies
//! [`grid::INNER_SIZE_RATIO`](crate::constants::grid::INNER_SIZE_RATIO) of
//! its cell and is centered within it.

use crate::constants::grid::{GRID_DIM, GRID_SIZE_RATIO, INNER_SIZE_RATIO};
use crate::error::{Result, ScanError};

/// One of the nine sampling rectangles of a facelet grid
///
/// Purely derived from frame dimensions; recomputed per frame, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl GridRegion {
    /// Pixel area of the region
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check whether this region overlaps another
    pub fn overlaps(&self, other: &GridRegion) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Compute the nine sampling regions for a frame, in raster order
/// (row-major, top-left to bottom-right)
///
/// # Errors
///
/// Returns `ScanError::InvalidFrame` if either dimension is zero, or if the
/// frame is so small that the sampling squares degenerate to zero area.
pub fn regions(frame_width: u32, frame_height: u32) -> Result<[GridRegion; 9]> {
    if frame_width == 0 || frame_height == 0 {
        return Err(ScanError::invalid_dimensions(frame_width, frame_height));
    }

    let grid_size = (frame_width.min(frame_height) as f32 * GRID_SIZE_RATIO) as u32;
    let offset_x = (frame_width - grid_size) / 2;
    let offset_y = (frame_height - grid_size) / 2;
    let cell_size = grid_size / GRID_DIM;
    let inner_size = (cell_size as f32 * INNER_SIZE_RATIO) as u32;
    let inner_offset = (cell_size - inner_size) / 2;

    if inner_size == 0 {
        return Err(ScanError::invalid_dimensions(frame_width, frame_height));
    }

    let mut out = [GridRegion {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    }; 9];

    for row in 0..GRID_DIM {
        for col in 0..GRID_DIM {
            out[(row * GRID_DIM + col) as usize] = GridRegion {
                x: offset_x + col * cell_size + inner_offset,
                y: offset_y + row * cell_size + inner_offset,
                width: inner_size,
                height: inner_size,
            };
        }
    }

    Ok(out)
}
