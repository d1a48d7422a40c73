//! # Cube Scan
//!
//! Color calibration and classification engine for a camera-scanned
//! Rubik's Cube.
//!
//! The pipeline has an offline and an online half:
//! - **Calibration** (once per rig/lighting): sample each sticker color
//!   through the 3x3 grid overlay, accumulate confirmed captures in a
//!   [`CalibrationSession`], and persist the derived [`ReferenceTable`].
//! - **Scanning** (per solve): for each face, sample the eight non-center
//!   grid regions, classify each sample against the table by nearest
//!   calibrated mean, and assemble the six faces into the 54-character
//!   state string an external solver consumes.
//!
//! Sampling happens in CIE Lab so that Euclidean distance approximates
//! perceptual color difference; classification is nearest-centroid and the
//! calibrated accept-ranges are diagnostic only.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cube_scan::{assemble, FaceScanner, ReferenceTable, FACE_ORDER_SCAN};
//! use std::path::Path;
//!
//! let table = ReferenceTable::from_json_file(Path::new("calibrated.json"))?;
//! let scanner = FaceScanner::new(table)?;
//!
//! let mut scans = Vec::new();
//! for face in FACE_ORDER_SCAN {
//!     let frame = image::open(format!("{}.png", face))?.to_rgb8();
//!     scans.push(scanner.scan_face(&frame, face)?);
//! }
//! println!("{}", assemble(&scans)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assemble;
pub mod calibration;
pub mod classify;
pub mod config;
pub mod constants;
pub mod error;
pub mod faces;
pub mod frames;
pub mod geometry;
pub mod sampler;
pub mod scanner;
pub mod solver;

pub use assemble::{assemble, FaceScan};
pub use calibration::{CalibrationSession, ReferenceEntry, ReferenceTable};
pub use classify::{classify, classify_with_distance};
pub use config::ScanConfig;
pub use error::{Result, ScanError};
pub use faces::{CubeColor, Face, CALIBRATION_COLOR_ORDER, FACE_ORDER_SCAN, FACE_ORDER_SOLVER};
pub use frames::{FrameSource, ImageFileSource};
pub use geometry::{regions, GridRegion};
pub use sampler::{sample, ColorSample};
pub use scanner::FaceScanner;
pub use solver::{Move, Solver};
