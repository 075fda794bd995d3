//! Gravity-Compensated Energy Signal

use recording::{RawSample, GRAVITY_UNITS};

/// Converts raw tri-axial samples into scalar acceleration magnitudes.
///
/// The reference axis (`x`) is offset by one gravity unit before taking the
/// vector norm. This assumes the axis stays roughly aligned with gravity
/// during a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySignalBuilder {
    gravity_units: f64,
}

impl EnergySignalBuilder {
    pub const fn new(gravity_units: f64) -> Self {
        Self { gravity_units }
    }

    pub const fn gravity_units(&self) -> f64 {
        self.gravity_units
    }

    /// Magnitude of a single sample
    #[inline]
    pub fn energy(&self, sample: &RawSample) -> f64 {
        let x = sample.x as f64 + self.gravity_units;
        let y = sample.y as f64;
        let z = sample.z as f64;
        (x * x + y * y + z * z).sqrt()
    }

    /// Energy signal for a window, one value per sample
    pub fn build(&self, samples: &[RawSample]) -> Vec<f64> {
        let mut signal = Vec::with_capacity(samples.len());
        self.build_into(samples, &mut signal);
        signal
    }

    /// Write the energy signal into `signal`, replacing its contents
    pub fn build_into(&self, samples: &[RawSample], signal: &mut Vec<f64>) {
        signal.clear();
        signal.extend(samples.iter().map(|s| self.energy(s)));
    }
}

impl Default for EnergySignalBuilder {
    fn default() -> Self {
        Self::new(GRAVITY_UNITS)
    }
}
