//! Frame acquisition seam
//!
//! The scanner is agnostic to where frames come from: live capture, a file
//! set, or synthetic buffers in tests. A source yielding `Ok(None)` signals
//! a transiently unavailable frame; the caller decides whether to retry.
//! Device acquisition and release are scoped to the source value itself, so
//! an abort or error path still releases the device when the source drops.

use image::RgbImage;
use std::path::PathBuf;

use crate::error::{Result, ScanError};

/// Source of successive RGB frames
pub trait FrameSource {
    /// Fetch the next frame
    ///
    /// `Ok(None)` means no frame is currently available (transient; the
    /// caller retries). Errors are frame-level and recoverable.
    fn next_frame(&mut self) -> Result<Option<RgbImage>>;
}

/// Frame source backed by still images on disk
///
/// Yields one frame per path in order, then `None`. Used by the CLI
/// binaries, where each "capture" is a pre-taken photo of a face.
pub struct ImageFileSource {
    paths: std::vec::IntoIter<PathBuf>,
}

impl ImageFileSource {
    /// Create a source over the given image paths
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths: paths.into_iter(),
        }
    }
}

impl FrameSource for ImageFileSource {
    fn next_frame(&mut self) -> Result<Option<RgbImage>> {
        match self.paths.next() {
            None => Ok(None),
            Some(path) => {
                let img = image::open(&path)
                    .map_err(|e| {
                        ScanError::invalid_frame(format!("failed to decode {}", path.display()), e)
                    })?
                    .to_rgb8();
                Ok(Some(img))
            }
        }
    }
}
