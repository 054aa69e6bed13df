// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so unrecognized keys are
//! rejected at startup with an actionable message.

use rei_core::{DEFAULT_MAX_INPUT_SIZE, DEFAULT_NORMALIZATION_BASE};
use serde::{Deserialize, Serialize};

/// Top-level Rei configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReiConfig {
    /// Target model settings.
    #[serde(default)]
    pub model: ModelConfig,

    /// Pipeline limits and sizing.
    #[serde(default)]
    pub pipeline: PipelineSettings,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Target model selection.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Identifier of the model the descriptors are generated for.
    #[serde(default = "default_model_name")]
    pub name: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model_name(),
        }
    }
}

fn default_model_name() -> String {
    "claude-3.5".to_string()
}

/// Pipeline limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineSettings {
    /// Largest measurable input size accepted by validation.
    #[serde(default = "default_max_input_size")]
    pub max_input_size: usize,

    /// Base of the size-normalization target, scaled by the model's token
    /// efficiency.
    #[serde(default = "default_normalization_base")]
    pub normalization_base: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            max_input_size: default_max_input_size(),
            normalization_base: default_normalization_base(),
        }
    }
}

fn default_max_input_size() -> usize {
    DEFAULT_MAX_INPUT_SIZE
}

fn default_normalization_base() -> usize {
    DEFAULT_NORMALIZATION_BASE
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
