//! Layered extractor settings

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use feature_engine::ExtractorConfig;
use std::path::Path;
use tracing::debug;

/// Environment prefix for overrides, e.g. `STEP_FEATURES_PARALLEL=true`
pub const ENV_PREFIX: &str = "STEP_FEATURES";

/// Load settings from an optional file, then environment overrides.
///
/// Keys that appear in neither fall back to [`ExtractorConfig::default`].
pub fn load_settings(path: Option<&Path>, env_prefix: &str) -> Result<ExtractorConfig> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path));
    }

    let settings = builder
        .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
        .build()
        .context("Could not load settings")?;

    let config: ExtractorConfig = settings
        .try_deserialize()
        .context("Could not parse extractor settings")?;
    debug!("Extractor settings: {:?}", config);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let config = load_settings(None, "STEP_FEATURES_TEST_DEFAULTS").unwrap();
        assert_eq!(config, ExtractorConfig::default());
    }

    #[test]
    fn test_file_then_environment() {
        let dir = std::env::temp_dir().join(format!("step-features-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "gravity_units = 256.0\nexpected_max_duration = 150\n").unwrap();

        std::env::set_var("STEP_FEATURES_TEST_LAYERS_EXPECTED_MAX_DURATION", "200");
        let config = load_settings(Some(&path), "STEP_FEATURES_TEST_LAYERS").unwrap();
        std::env::remove_var("STEP_FEATURES_TEST_LAYERS_EXPECTED_MAX_DURATION");

        assert_eq!(config.gravity_units, 256.0);
        assert_eq!(config.expected_max_duration, 200);
        assert_eq!(config.kernel_half_length, 10);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = load_settings(Some(Path::new("/nonexistent/settings.toml")), "STEP_FEATURES_TEST_MISSING");
        assert!(result.is_err());
    }
}
