//! Color calibration: sample accumulation and the persisted reference table
//!
//! Calibration runs once, offline: the operator shows each sticker color to
//! the camera, confirmed captures accumulate in a [`CalibrationSession`],
//! and `finalize` derives one [`ReferenceEntry`] per color. The resulting
//! [`ReferenceTable`] is written once and read-only thereafter.

pub mod session;
pub mod table;

pub use session::CalibrationSession;
pub use table::{ReferenceEntry, ReferenceTable};
