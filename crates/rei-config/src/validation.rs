// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::ReiConfig;

/// Accepted values for `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Smallest accepted `pipeline.normalization_base`. Every built-in model
/// scales this to a target of at least [`rei_core::MIN_NORMALIZATION_TARGET`].
pub const MIN_NORMALIZATION_BASE: usize = 16;

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure rather than stopping at the first.
pub fn validate_config(config: &ReiConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.model.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "model.name must not be empty".to_string(),
        });
    }

    if config.pipeline.max_input_size == 0 {
        errors.push(ConfigError::Validation {
            message: "pipeline.max_input_size must be greater than zero".to_string(),
        });
    }

    if config.pipeline.normalization_base < MIN_NORMALIZATION_BASE {
        errors.push(ConfigError::Validation {
            message: format!(
                "pipeline.normalization_base must be at least {MIN_NORMALIZATION_BASE}, got {}",
                config.pipeline.normalization_base
            ),
        });
    }

    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{}` is not one of: {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ReiConfig::default()).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let mut config = ReiConfig::default();
        config.model.name = "  ".into();
        config.pipeline.max_input_size = 0;
        config.pipeline.normalization_base = 0;
        config.logging.level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn normalization_base_has_a_floor() {
        let mut config = ReiConfig::default();
        config.pipeline.normalization_base = MIN_NORMALIZATION_BASE;
        assert!(validate_config(&config).is_ok());

        config.pipeline.normalization_base = MIN_NORMALIZATION_BASE - 1;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("normalization_base"));
    }

    #[test]
    fn unknown_fields_are_rejected_by_toml() {
        assert!(toml::from_str::<ReiConfig>("[pipeline]\nnormalisation_base = 64\n").is_err());
        assert!(toml::from_str::<ReiConfig>("[pipeline]\nnormalization_base = 64\n").is_ok());
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = ReiConfig::default();
        config.logging.level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
