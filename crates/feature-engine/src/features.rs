//! Per-Step Feature Extraction

use crate::config::ExtractorConfig;
use crate::energy::EnergySignalBuilder;
use crate::error::ExtractionError;
use crate::kernel::{FilterKernel, STANDARD_HALF_LENGTH};
use recording::{RawSample, Recording};
use serde::Serialize;
use std::borrow::Cow;
use step_validator::{ReadWindow, Step, StepError, StepValidator};
use tracing::{debug, info, trace, warn};

/// Features of a step that could be computed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepFeatures {
    /// Smoothed mean energy over the step
    pub mean_energy: f64,
    /// Σ |x| / G over the step's own samples
    pub sum_abs_x: f64,
    /// Σ |y| / G over the step's own samples
    pub sum_abs_y: f64,
    /// Σ |z| / G over the step's own samples
    pub sum_abs_z: f64,
}

/// One output row per input step.
///
/// Either all four columns are present or all four are missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FeatureRow {
    #[serde(rename = "FMeanE.mean")]
    mean_energy: Option<f64>,
    #[serde(rename = "FSumAbsX.mean")]
    sum_abs_x: Option<f64>,
    #[serde(rename = "FSumAbsY.mean")]
    sum_abs_y: Option<f64>,
    #[serde(rename = "FSumAbsZ.mean")]
    sum_abs_z: Option<f64>,
}

impl FeatureRow {
    /// Row with every column missing
    pub const fn missing() -> Self {
        Self {
            mean_energy: None,
            sum_abs_x: None,
            sum_abs_y: None,
            sum_abs_z: None,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.mean_energy.is_none()
    }

    pub fn features(&self) -> Option<StepFeatures> {
        Some(StepFeatures {
            mean_energy: self.mean_energy?,
            sum_abs_x: self.sum_abs_x?,
            sum_abs_y: self.sum_abs_y?,
            sum_abs_z: self.sum_abs_z?,
        })
    }

    pub fn mean_energy(&self) -> Option<f64> {
        self.mean_energy
    }

    pub fn sum_abs_x(&self) -> Option<f64> {
        self.sum_abs_x
    }

    pub fn sum_abs_y(&self) -> Option<f64> {
        self.sum_abs_y
    }

    pub fn sum_abs_z(&self) -> Option<f64> {
        self.sum_abs_z
    }
}

impl From<StepFeatures> for FeatureRow {
    fn from(f: StepFeatures) -> Self {
        Self {
            mean_energy: Some(f.mean_energy),
            sum_abs_x: Some(f.sum_abs_x),
            sum_abs_y: Some(f.sum_abs_y),
            sum_abs_z: Some(f.sum_abs_z),
        }
    }
}

impl From<Option<StepFeatures>> for FeatureRow {
    fn from(f: Option<StepFeatures>) -> Self {
        f.map(Self::from).unwrap_or_default()
    }
}

/// Counts of how each step in a batch was handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    pub total: usize,
    pub extracted: usize,
    pub unknown_duration: usize,
    pub invalid_duration: usize,
    pub out_of_range: usize,
}

impl ExtractionSummary {
    /// Number of rows emitted as missing
    pub fn missing(&self) -> usize {
        self.unknown_duration + self.invalid_duration + self.out_of_range
    }

    fn record(&mut self, outcome: &StepOutcome) {
        match outcome {
            StepOutcome::Extracted(_) => self.extracted += 1,
            StepOutcome::Skipped(StepError::UnknownDuration) => self.unknown_duration += 1,
            StepOutcome::Skipped(StepError::InvalidDuration { .. }) => self.invalid_duration += 1,
            StepOutcome::Skipped(StepError::WindowOutOfRange { .. }) => self.out_of_range += 1,
        }
    }
}

enum StepOutcome {
    Extracted(StepFeatures),
    Skipped(StepError),
}

impl StepOutcome {
    fn into_row(self) -> FeatureRow {
        match self {
            StepOutcome::Extracted(features) => features.into(),
            StepOutcome::Skipped(_) => FeatureRow::missing(),
        }
    }
}

/// Extracts energy and axis-sum features for every step of a recording
#[derive(Debug, Clone)]
pub struct StepFeatureExtractor {
    /// Smoothing kernel, shared with every other extractor when standard
    kernel: Cow<'static, FilterKernel>,
    energy: EnergySignalBuilder,
    validator: StepValidator,
    config: ExtractorConfig,
}

impl StepFeatureExtractor {
    /// Create an extractor with a triangular kernel of the configured length
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractionError> {
        config.validate()?;
        let kernel = if config.kernel_half_length == STANDARD_HALF_LENGTH {
            Cow::Borrowed(FilterKernel::standard())
        } else {
            let kernel = FilterKernel::triangular(config.kernel_half_length)
                .map_err(|e| ExtractionError::InvalidConfig(e.to_string()))?;
            Cow::Owned(kernel)
        };
        Ok(Self::assemble(config, kernel))
    }

    /// Create an extractor around an already built kernel.
    ///
    /// The kernel's half-length overrides `config.kernel_half_length`.
    pub fn with_kernel(mut config: ExtractorConfig, kernel: FilterKernel) -> Result<Self, ExtractionError> {
        config.kernel_half_length = kernel.half_len();
        config.validate()?;
        Ok(Self::assemble(config, Cow::Owned(kernel)))
    }

    fn assemble(config: ExtractorConfig, kernel: Cow<'static, FilterKernel>) -> Self {
        if config.parallel && !cfg!(feature = "rayon") {
            warn!("Parallel extraction requested but the `rayon` feature is disabled; running sequentially");
        }
        Self {
            energy: EnergySignalBuilder::new(config.gravity_units),
            validator: StepValidator::new(kernel.half_len()),
            kernel,
            config,
        }
    }

    pub fn kernel(&self) -> &FilterKernel {
        &self.kernel
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract one feature row per step, in step order
    pub fn extract<R>(&self, recording: &R, steps: &[Step]) -> Result<Vec<FeatureRow>, ExtractionError>
    where
        R: Recording + Sync + ?Sized,
    {
        self.extract_with_summary(recording, steps).map(|(rows, _)| rows)
    }

    /// Extract feature rows and report how each step was handled
    pub fn extract_with_summary<R>(
        &self,
        recording: &R,
        steps: &[Step],
    ) -> Result<(Vec<FeatureRow>, ExtractionSummary), ExtractionError>
    where
        R: Recording + Sync + ?Sized,
    {
        debug!(
            "Extracting features: {} steps over {} samples",
            steps.len(),
            recording.row_count()
        );

        let outcomes = self.outcomes(recording, steps)?;

        let mut summary = ExtractionSummary {
            total: steps.len(),
            ..Default::default()
        };
        let rows = outcomes
            .into_iter()
            .map(|outcome| {
                summary.record(&outcome);
                outcome.into_row()
            })
            .collect();

        info!(
            "Extracted {}/{} steps (unknown duration: {}, invalid duration: {}, out of range: {})",
            summary.extracted,
            summary.total,
            summary.unknown_duration,
            summary.invalid_duration,
            summary.out_of_range
        );

        Ok((rows, summary))
    }

    /// Extract the feature row of a single step
    pub fn extract_step<R>(&self, recording: &R, step: &Step) -> Result<FeatureRow, ExtractionError>
    where
        R: Recording + ?Sized,
    {
        let mut energy = Vec::new();
        self.step_outcome(recording, step, &mut energy)
            .map(StepOutcome::into_row)
    }

    #[cfg(feature = "rayon")]
    fn outcomes<R>(&self, recording: &R, steps: &[Step]) -> Result<Vec<StepOutcome>, ExtractionError>
    where
        R: Recording + Sync + ?Sized,
    {
        use rayon::prelude::*;

        if !self.config.parallel {
            return self.sequential_outcomes(recording, steps);
        }

        steps
            .par_iter()
            .map_init(
                || Vec::with_capacity(self.buffer_capacity()),
                |energy, step| self.step_outcome(recording, step, energy),
            )
            .collect()
    }

    #[cfg(not(feature = "rayon"))]
    fn outcomes<R>(&self, recording: &R, steps: &[Step]) -> Result<Vec<StepOutcome>, ExtractionError>
    where
        R: Recording + Sync + ?Sized,
    {
        self.sequential_outcomes(recording, steps)
    }

    fn sequential_outcomes<R>(&self, recording: &R, steps: &[Step]) -> Result<Vec<StepOutcome>, ExtractionError>
    where
        R: Recording + ?Sized,
    {
        let mut energy = Vec::with_capacity(self.buffer_capacity());
        steps
            .iter()
            .map(|step| self.step_outcome(recording, step, &mut energy))
            .collect()
    }

    fn buffer_capacity(&self) -> usize {
        self.config.expected_max_duration + self.kernel.len()
    }

    fn step_outcome<R>(
        &self,
        recording: &R,
        step: &Step,
        energy: &mut Vec<f64>,
    ) -> Result<StepOutcome, ExtractionError>
    where
        R: Recording + ?Sized,
    {
        let window = match self.validator.validate(step, recording.row_count()) {
            Ok(window) => window,
            Err(reason) => {
                debug!("Skipping step at {}: {}", step.time_index, reason);
                return Ok(StepOutcome::Skipped(reason));
            }
        };

        if window.duration > self.config.expected_max_duration {
            warn!(
                "Step at {} lasts {} samples, above expected maximum of {}",
                step.time_index, window.duration, self.config.expected_max_duration
            );
        }

        let samples = recording.read_window(window.start, window.len)?;
        if samples.len() != window.len {
            return Err(ExtractionError::ShortRead {
                expected: window.len,
                actual: samples.len(),
            });
        }

        self.energy.build_into(&samples, energy);
        let features = self.compute(&window, &samples, energy)?;
        trace!("Step at {}: {:?}", step.time_index, features);

        Ok(StepOutcome::Extracted(features))
    }

    fn compute(
        &self,
        window: &ReadWindow,
        samples: &[RawSample],
        energy: &[f64],
    ) -> Result<StepFeatures, ExtractionError> {
        let g = self.energy.gravity_units();

        let (sum_abs_x, sum_abs_y, sum_abs_z) = samples[window.step_range()].iter().fold(
            (0.0, 0.0, 0.0),
            |(x, y, z), s| {
                (
                    x + (s.x as f64).abs() / g,
                    y + (s.y as f64).abs() / g,
                    z + (s.z as f64).abs() / g,
                )
            },
        );

        let mut total = 0.0;
        for j in 0..window.duration {
            total += self
                .kernel
                .apply_at(energy, j)
                .ok_or(ExtractionError::ShortRead {
                    expected: window.len,
                    actual: energy.len(),
                })?;
        }

        Ok(StepFeatures {
            mean_energy: total / window.duration as f64,
            sum_abs_x,
            sum_abs_y,
            sum_abs_z,
        })
    }
}

impl Default for StepFeatureExtractor {
    fn default() -> Self {
        Self::assemble(
            ExtractorConfig::default(),
            Cow::Borrowed(FilterKernel::standard()),
        )
    }
}
