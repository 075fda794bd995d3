//! In-Memory Recording Implementation

use crate::{RawSample, Recording, RecordingError};
use std::borrow::Cow;

/// Recording held entirely in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryRecording {
    /// Samples in acquisition order
    storage: Box<[RawSample]>,
}

impl InMemoryRecording {
    /// Create a recording from samples in acquisition order
    pub fn new(samples: Vec<RawSample>) -> Self {
        Self {
            storage: samples.into_boxed_slice(),
        }
    }

    /// Create a recording of `len` identical samples
    pub fn constant(sample: RawSample, len: usize) -> Self {
        Self::new(vec![sample; len])
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Check if the recording holds no samples
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// All samples in order
    pub fn samples(&self) -> &[RawSample] {
        &self.storage
    }
}

impl From<Vec<RawSample>> for InMemoryRecording {
    fn from(samples: Vec<RawSample>) -> Self {
        Self::new(samples)
    }
}

impl FromIterator<RawSample> for InMemoryRecording {
    fn from_iter<I: IntoIterator<Item = RawSample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Recording for InMemoryRecording {
    fn row_count(&self) -> usize {
        self.storage.len()
    }

    fn read_window(&self, start: usize, len: usize) -> Result<Cow<'_, [RawSample]>, RecordingError> {
        let rows = self.storage.len();
        let end = start
            .checked_add(len)
            .filter(|&end| end <= rows)
            .ok_or(RecordingError::WindowOutOfBounds { start, len, rows })?;

        Ok(Cow::Borrowed(&self.storage[start..end]))
    }
}
