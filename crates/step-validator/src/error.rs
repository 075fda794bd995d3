//! Step Error Types

use thiserror::Error;

/// Reasons a step cannot produce features
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// Duration was not computable upstream
    #[error("step duration is unknown")]
    UnknownDuration,

    /// Duration is zero or negative
    #[error("step duration {duration} is not positive")]
    InvalidDuration { duration: i64 },

    /// Padded window extends before sample 0 or past the last sample
    #[error("step at {time_index} (+{duration}) needs samples outside recording of {row_count} rows")]
    WindowOutOfRange {
        time_index: i64,
        duration: i64,
        row_count: usize,
    },
}
