// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Target-model capability lookup.

use crate::types::ModelCapabilities;

/// Source of capability records for supported target models.
pub trait CapabilityProvider: Send + Sync {
    /// Capabilities for `model_id`, or `None` if the model is unsupported.
    fn capabilities(&self, model_id: &str) -> Option<ModelCapabilities>;

    /// Every supported model identifier, sorted.
    fn supported_models(&self) -> Vec<String>;
}
