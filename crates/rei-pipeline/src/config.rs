// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability-driven pipeline configuration.

use rei_core::{ModelCapabilities, PipelineConfig, SecurityTier};

pub const DEFAULT_MAX_COMPLEXITY: f64 = 1.0;
pub const DEFAULT_SUPPORTS_BINARY: bool = true;
pub const DEFAULT_TOKEN_EFFICIENCY: f64 = 1.0;

/// Build the immutable [`PipelineConfig`] for a capability record.
///
/// Missing numeric fields take their defaults. The tier is `complex` for
/// models with advanced reasoning, `standard` for models with function
/// calling, and `basic` otherwise; advanced reasoning wins when both are set.
pub fn build_config(capabilities: &ModelCapabilities) -> PipelineConfig {
    PipelineConfig {
        max_complexity: capabilities
            .max_complexity
            .unwrap_or(DEFAULT_MAX_COMPLEXITY),
        supports_binary: capabilities
            .supports_binary
            .unwrap_or(DEFAULT_SUPPORTS_BINARY),
        token_efficiency: capabilities
            .token_efficiency
            .unwrap_or(DEFAULT_TOKEN_EFFICIENCY),
        encryption_tier: select_tier(capabilities),
        tool_dialect: capabilities.dialect,
    }
}

fn select_tier(capabilities: &ModelCapabilities) -> SecurityTier {
    if capabilities.advanced_reasoning {
        SecurityTier::Complex
    } else if capabilities.function_calling {
        SecurityTier::Standard
    } else {
        SecurityTier::Basic
    }
}
