//! Step and Read Window Types

use serde::{Deserialize, Serialize};

/// Single detected step as supplied by the step table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Sample index where the step begins
    #[serde(rename = "time")]
    pub time_index: i64,
    /// Step length in samples, `None` when unknown upstream
    pub duration: Option<i64>,
}

impl Step {
    /// Create a step with known duration
    pub const fn new(time_index: i64, duration: i64) -> Self {
        Self {
            time_index,
            duration: Some(duration),
        }
    }

    /// Create a step whose duration could not be determined
    pub const fn unknown_duration(time_index: i64) -> Self {
        Self {
            time_index,
            duration: None,
        }
    }
}

/// Padded sample window for one validated step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadWindow {
    /// First sample to read (`time_index - half`)
    pub start: usize,
    /// Number of samples to read (`duration + 2 * half`)
    pub len: usize,
    /// Samples belonging to the step itself
    pub duration: usize,
    /// Padding on each side of the step
    pub padding: usize,
}

impl ReadWindow {
    /// Window positions covering the step's own samples
    pub fn step_range(&self) -> std::ops::Range<usize> {
        self.padding..self.padding + self.duration
    }
}
