//! Extractor configuration

use crate::error::ExtractionError;
use crate::kernel::STANDARD_HALF_LENGTH;
use recording::GRAVITY_UNITS;
use serde::{Deserialize, Serialize};

/// Step feature extractor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Raw sensor units equivalent to 1 g
    pub gravity_units: f64,

    /// Half-length of the triangular smoothing kernel
    pub kernel_half_length: usize,

    /// Expected upper bound on step duration (samples).
    /// Only used to pre-size buffers; longer steps are still processed.
    pub expected_max_duration: usize,

    /// Process steps on the rayon thread pool (needs the `rayon` feature)
    pub parallel: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            gravity_units: GRAVITY_UNITS,
            kernel_half_length: STANDARD_HALF_LENGTH,
            expected_max_duration: 100,
            parallel: false,
        }
    }
}

impl ExtractorConfig {
    /// Default constants with parallel step processing enabled
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ExtractionError> {
        if !(self.gravity_units.is_finite() && self.gravity_units > 0.0) {
            return Err(ExtractionError::InvalidConfig(format!(
                "gravity_units must be positive, got {}",
                self.gravity_units
            )));
        }
        if self.kernel_half_length == 0 {
            return Err(ExtractionError::InvalidConfig(
                "kernel_half_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_standard_constants() {
        let config = ExtractorConfig::default();
        assert_eq!(config.gravity_units, 336.0);
        assert_eq!(config.kernel_half_length, 10);
        assert_eq!(config.expected_max_duration, 100);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: ExtractorConfig = serde_json::from_str(r#"{"parallel": true}"#).unwrap();
        assert_eq!(config, ExtractorConfig::parallel());
    }

    #[test]
    fn test_invalid_values() {
        let zero_gravity = ExtractorConfig {
            gravity_units: 0.0,
            ..Default::default()
        };
        assert!(zero_gravity.validate().is_err());

        let no_kernel = ExtractorConfig {
            kernel_half_length: 0,
            ..Default::default()
        };
        assert!(no_kernel.validate().is_err());
    }
}
