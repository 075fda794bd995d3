//! JSON job input

use anyhow::{Context, Result};
use feature_engine::{InMemoryRecording, RawSample, Step};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Recording samples and the steps detected in them
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    /// Raw `[x, y, z]` readings in acquisition order
    pub samples: Vec<[i32; 3]>,
    /// Step table, one output row per entry
    pub steps: Vec<Step>,
}

impl Job {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open job file {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid job file {}", path.display()))
    }

    pub fn recording(&self) -> InMemoryRecording {
        self.samples.iter().copied().map(RawSample::from).collect()
    }
}
