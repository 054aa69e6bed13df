// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`ReconstructionTool`] trait.

use rei_core::{ContentTag, PipelineConfig, SecurityTier};

/// What a tool description may say about the token it reconstructs.
#[derive(Debug, Clone, Copy)]
pub struct ToolContext<'a> {
    pub tag: ContentTag,
    pub tier: SecurityTier,
    pub config: &'a PipelineConfig,
}

/// One entry of a reconstruction descriptor, independent of dialect.
pub trait ReconstructionTool: Send + Sync {
    /// Unique tool name.
    fn name(&self) -> &str;

    fn description(&self, ctx: &ToolContext<'_>) -> String;

    /// JSON Schema of the tool's arguments.
    fn parameters_schema(&self, ctx: &ToolContext<'_>) -> serde_json::Value;

    /// Whether the generated entry transports the token key.
    fn carries_key(&self) -> bool {
        false
    }
}
