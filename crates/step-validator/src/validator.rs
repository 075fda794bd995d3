//! Step Validator for Range Checking

use crate::error::StepError;
use crate::step::{ReadWindow, Step};

/// Validates steps against a recording length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepValidator {
    /// Samples of padding required on each side of a step
    half_len: usize,
}

impl StepValidator {
    /// Create a validator for a kernel of half-length `half_len`
    pub const fn new(half_len: usize) -> Self {
        Self { half_len }
    }

    /// Padding required on each side of a step
    pub const fn half_len(&self) -> usize {
        self.half_len
    }

    /// Validate the duration of a step
    pub fn validate_duration(&self, step: &Step) -> Result<usize, StepError> {
        match step.duration {
            None => Err(StepError::UnknownDuration),
            Some(d) if d <= 0 => Err(StepError::InvalidDuration { duration: d }),
            Some(d) => usize::try_from(d).map_err(|_| StepError::InvalidDuration { duration: d }),
        }
    }

    /// Validate a step and compute its padded read window.
    ///
    /// The step is out of range when `time_index < half` or
    /// `time_index + duration + half > row_count`.
    pub fn validate(&self, step: &Step, row_count: usize) -> Result<ReadWindow, StepError> {
        let duration = self.validate_duration(step)?;
        let out_of_range = || StepError::WindowOutOfRange {
            time_index: step.time_index,
            duration: duration as i64,
            row_count,
        };

        let half = self.half_len as i64;
        if step.time_index < half {
            return Err(out_of_range());
        }

        let end = step
            .time_index
            .checked_add(duration as i64)
            .and_then(|e| e.checked_add(half))
            .ok_or_else(out_of_range)?;
        if end > row_count as i64 {
            return Err(out_of_range());
        }

        Ok(ReadWindow {
            start: (step.time_index - half) as usize,
            len: duration + 2 * self.half_len,
            duration,
            padding: self.half_len,
        })
    }
}

impl Default for StepValidator {
    fn default() -> Self {
        Self::new(10)
    }
}
