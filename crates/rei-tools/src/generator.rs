// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dialect-aware descriptor generation.

use rei_core::{
    BoxError, ContentTag, DerivedKey, DescriptorEntry, DescriptorGenerator, PipelineConfig,
    ReconstructionDescriptor, SecurityTier, ToolDialect,
};
use tracing::debug;

use crate::builtin::{DecompressTool, DecryptTool, DescribeTool};
use crate::tool::{ReconstructionTool, ToolContext};

/// Appended to the key-carrying entry's description.
pub const KEY_DISCLOSURE: &str = "Key disclosure: whoever holds this descriptor can decrypt the \
     token. Do not forward it to parties that should not read the context.";

/// [`DescriptorGenerator`] that renders the built-in reconstruction tools in
/// the dialect named by the pipeline configuration.
pub struct ToolDescriptorGenerator {
    tools: Vec<Box<dyn ReconstructionTool>>,
}

impl Default for ToolDescriptorGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolDescriptorGenerator {
    pub fn new() -> Self {
        Self {
            tools: vec![
                Box::new(DecryptTool),
                Box::new(DecompressTool),
                Box::new(DescribeTool),
            ],
        }
    }

    fn entry(
        &self,
        tool: &dyn ReconstructionTool,
        dialect: ToolDialect,
        ctx: &ToolContext<'_>,
        key: &DerivedKey,
    ) -> DescriptorEntry {
        let mut description = tool.description(ctx);
        if tool.carries_key() {
            description.push(' ');
            description.push_str(KEY_DISCLOSURE);
        }
        let schema = render(dialect, tool.name(), &description, tool.parameters_schema(ctx));

        DescriptorEntry {
            name: tool.name().to_string(),
            description,
            schema,
            key: tool.carries_key().then(|| key.clone()),
        }
    }
}

/// One tool declaration in `dialect`'s wire shape.
pub fn render(
    dialect: ToolDialect,
    name: &str,
    description: &str,
    parameters: serde_json::Value,
) -> serde_json::Value {
    match dialect {
        ToolDialect::OpenAiFunctions => serde_json::json!({
            "type": "function",
            "function": {
                "name": name,
                "description": description,
                "parameters": parameters,
            }
        }),
        ToolDialect::AnthropicTools => serde_json::json!({
            "name": name,
            "description": description,
            "input_schema": parameters,
        }),
    }
}

impl DescriptorGenerator for ToolDescriptorGenerator {
    fn generate(
        &self,
        model_id: &str,
        key: &DerivedKey,
        tag: ContentTag,
        tier: SecurityTier,
        config: &PipelineConfig,
    ) -> Result<ReconstructionDescriptor, BoxError> {
        let dialect = config.tool_dialect;
        let ctx = ToolContext { tag, tier, config };
        let entries: Vec<DescriptorEntry> = self
            .tools
            .iter()
            .map(|tool| self.entry(tool.as_ref(), dialect, &ctx, key))
            .collect();

        debug!(model = model_id, %dialect, entries = entries.len(), "descriptor generated");
        Ok(ReconstructionDescriptor {
            model: model_id.to_string(),
            entries,
        })
    }
}
