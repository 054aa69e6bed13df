// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reconstruction descriptor generator trait.

use crate::error::BoxError;
use crate::types::{ContentTag, DerivedKey, PipelineConfig, ReconstructionDescriptor, SecurityTier};

/// Produces the tool/function entries a model needs to reconstruct a token.
pub trait DescriptorGenerator: Send + Sync {
    /// Entries follow `model_id`'s native tool-call schema. Exactly one entry
    /// must carry `key`.
    fn generate(
        &self,
        model_id: &str,
        key: &DerivedKey,
        tag: ContentTag,
        tier: SecurityTier,
        config: &PipelineConfig,
    ) -> Result<ReconstructionDescriptor, BoxError>;
}
