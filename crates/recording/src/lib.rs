//! Accelerometer Recording Access
//!
//! Provides the narrow accessor the feature engine reads raw samples through,
//! plus an in-memory implementation.

mod error;
mod memory;

pub use error::RecordingError;
pub use memory::InMemoryRecording;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Raw sensor units equivalent to 1 g on the reference axis
pub const GRAVITY_UNITS: f64 = 336.0;

/// Single tri-axial accelerometer reading in raw sensor units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSample {
    /// Reference (vertical) axis
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl RawSample {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl From<[i32; 3]> for RawSample {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self { x, y, z }
    }
}

/// Read-only access to a fixed-length recording.
///
/// Implementations must be immutable for the duration of an extraction run.
pub trait Recording {
    /// Total number of samples in the recording
    fn row_count(&self) -> usize;

    /// Read `len` consecutive samples starting at `start`.
    ///
    /// Fails with [`RecordingError::WindowOutOfBounds`] when the window does
    /// not lie entirely within `[0, row_count())`.
    fn read_window(&self, start: usize, len: usize) -> Result<Cow<'_, [RawSample]>, RecordingError>;
}

impl<R: Recording + ?Sized> Recording for &R {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn read_window(&self, start: usize, len: usize) -> Result<Cow<'_, [RawSample]>, RecordingError> {
        (**self).read_window(start, len)
    }
}
