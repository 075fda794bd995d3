//! Recording Error Types

use thiserror::Error;

/// Errors raised by a recording accessor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordingError {
    /// Requested window leaves the recording
    #[error("window [{start}, {start}+{len}) is outside recording of {rows} rows")]
    WindowOutOfBounds { start: usize, len: usize, rows: usize },
}
