//! Triangular Smoothing Kernel

use once_cell::sync::Lazy;
use thiserror::Error;

/// Half-length of the standard energy kernel
pub const STANDARD_HALF_LENGTH: usize = 10;

static STANDARD_KERNEL: Lazy<FilterKernel> = Lazy::new(|| FilterKernel::build(STANDARD_HALF_LENGTH));

/// Kernel construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("kernel half-length must be at least 1")]
    EmptyKernel,
}

/// Normalized triangular weighting sequence.
///
/// Weights ramp `1, 2, .., half, half, .., 2, 1` and are divided by their sum
/// once at construction. There is no way to mutate them afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterKernel {
    weights: Box<[f64]>,
}

impl FilterKernel {
    /// Build a triangular kernel of length `2 * half_len`
    pub fn triangular(half_len: usize) -> Result<Self, KernelError> {
        if half_len == 0 {
            return Err(KernelError::EmptyKernel);
        }
        Ok(Self::build(half_len))
    }

    /// Shared 20-tap kernel, built on first use
    pub fn standard() -> &'static FilterKernel {
        &STANDARD_KERNEL
    }

    fn build(half_len: usize) -> Self {
        let ramp: Vec<f64> = (1..=half_len)
            .chain((1..=half_len).rev())
            .map(|w| w as f64)
            .collect();
        let total: f64 = ramp.iter().sum();

        Self {
            weights: ramp.into_iter().map(|w| w / total).collect(),
        }
    }

    /// Normalized weights in tap order
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of taps
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false; kernels have at least two taps
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Padding needed on each side of a smoothed range
    pub fn half_len(&self) -> usize {
        self.weights.len() / 2
    }

    /// Sum of all weights (1.0 up to rounding)
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Weighted sum `Σ w[k] * signal[j + L - k]` for output offset `j`.
    ///
    /// Returns `None` if `signal` does not reach index `j + L`.
    pub fn apply_at(&self, signal: &[f64], j: usize) -> Option<f64> {
        let taps = self.weights.len();
        if j + taps >= signal.len() {
            return None;
        }

        Some(
            self.weights
                .iter()
                .enumerate()
                .map(|(k, w)| w * signal[j + taps - k])
                .sum(),
        )
    }
}

impl Default for FilterKernel {
    fn default() -> Self {
        Self::standard().clone()
    }
}
