//! Error types for the cube_scan library

use thiserror::Error;

/// Result type alias for cube_scan operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Error types for grid sampling, calibration, classification and assembly
#[derive(Error, Debug)]
pub enum ScanError {
    /// Frame has degenerate dimensions or could not be decoded
    #[error("Invalid frame: {message}")]
    InvalidFrame {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Sampling region resolved to zero pixels
    #[error("Empty sampling region at ({x}, {y}), {width}x{height}")]
    EmptyRegion {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A calibration color received no captured samples
    #[error("No samples captured for color '{label}'")]
    InsufficientSamples { label: String },

    /// Classification attempted against a reference table with no entries
    #[error("Reference table has no entries")]
    EmptyTable,

    /// Assembly attempted with missing faces or facelets
    #[error("Incomplete scan: {reason}")]
    IncompleteScan { reason: String },

    /// Reference table or config could not be read or written
    #[error("Table I/O error: {message}")]
    TableIo {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ScanError {
    /// Create an invalid-frame error from degenerate dimensions
    pub fn invalid_dimensions(width: u32, height: u32) -> Self {
        Self::InvalidFrame {
            message: format!("degenerate dimensions {}x{}", width, height),
            source: None,
        }
    }

    /// Create an invalid-frame error with an underlying cause
    pub fn invalid_frame<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidFrame {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a table I/O error with an underlying cause
    pub fn table_io<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::TableIo {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an incomplete-scan error
    pub fn incomplete(reason: impl Into<String>) -> Self {
        Self::IncompleteScan {
            reason: reason.into(),
        }
    }

    /// Check whether the operator can recover by recapturing the current frame
    ///
    /// Frame and region errors abort only the current capture; missing-table
    /// and incomplete-scan errors abort the whole scan/solve attempt.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ScanError::InvalidFrame { .. }
                | ScanError::EmptyRegion { .. }
                | ScanError::InsufficientSamples { .. }
        )
    }
}
