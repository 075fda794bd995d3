//! Step Feature Engine
//!
//! Computes per-step motion features from a tri-axial accelerometer
//! recording for downstream speed estimation:
//!
//! - `FMeanE`: mean of the gravity-compensated energy signal, smoothed with a
//!   20-tap triangular kernel
//! - `FSumAbsX/Y/Z`: summed absolute acceleration per axis, in units of g
//!
//! Steps that cannot be processed (unknown duration, too close to either end
//! of the recording) produce an all-missing row instead of an error.

mod config;
mod energy;
mod error;
mod features;
mod kernel;
mod statistics;

pub use config::ExtractorConfig;
pub use energy::EnergySignalBuilder;
pub use error::ExtractionError;
pub use features::{ExtractionSummary, FeatureRow, StepFeatureExtractor, StepFeatures};
pub use kernel::{FilterKernel, KernelError, STANDARD_HALF_LENGTH};
pub use statistics::{ColumnSummary, FeatureColumns};

pub use recording::{InMemoryRecording, RawSample, Recording, RecordingError, GRAVITY_UNITS};
pub use step_validator::{ReadWindow, Step, StepError, StepValidator};
