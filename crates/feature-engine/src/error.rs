//! Extraction Error Types

use recording::RecordingError;
use thiserror::Error;

/// Errors that abort a whole extraction batch.
///
/// Per-step problems (unknown duration, window out of range) are not errors
/// here; they produce missing feature rows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractionError {
    /// Accessor refused a window that had already been validated
    #[error("recording accessor failed: {0}")]
    Recording(#[from] RecordingError),

    /// Accessor returned fewer samples than requested
    #[error("short read: expected {expected} samples, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}
