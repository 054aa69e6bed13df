// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The three reconstruction tools every descriptor declares.

use rei_core::{ContentFamily, TOKEN_WIDTH};

use crate::tool::{ReconstructionTool, ToolContext};
use crate::{DECOMPRESS_TOOL, DECRYPT_TOOL, DESCRIBE_TOOL};

/// Opens the sealed payload of a token.
pub struct DecryptTool;

impl ReconstructionTool for DecryptTool {
    fn name(&self) -> &str {
        DECRYPT_TOOL
    }

    fn description(&self, ctx: &ToolContext<'_>) -> String {
        format!(
            "Decrypt a {TOKEN_WIDTH}-character Rei context token sealed at the {} tier. \
             The decryption key is supplied by the host application with this tool.",
            ctx.tier
        )
    }

    fn parameters_schema(&self, _ctx: &ToolContext<'_>) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "token": {
                    "type": "string",
                    "description": "The encoded context token",
                    "minLength": TOKEN_WIDTH,
                    "maxLength": TOKEN_WIDTH
                }
            },
            "required": ["token"]
        })
    }

    fn carries_key(&self) -> bool {
        true
    }
}

/// Reverses the content transform applied before sealing.
pub struct DecompressTool;

impl ReconstructionTool for DecompressTool {
    fn name(&self) -> &str {
        DECOMPRESS_TOOL
    }

    fn description(&self, ctx: &ToolContext<'_>) -> String {
        let family = match ctx.tag.family() {
            ContentFamily::Text => "text",
            ContentFamily::Binary => "binary",
        };
        format!(
            "Decompress decrypted Rei context back into {} ({family} content).",
            ctx.tag
        )
    }

    fn parameters_schema(&self, ctx: &ToolContext<'_>) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "payload": {
                    "type": "string",
                    "description": "Base64 output of the decrypt tool"
                },
                "content_type": {
                    "type": "string",
                    "enum": [ctx.tag.to_string()]
                }
            },
            "required": ["payload", "content_type"]
        })
    }
}

/// Reports what a token holds without opening it.
pub struct DescribeTool;

impl ReconstructionTool for DescribeTool {
    fn name(&self) -> &str {
        DESCRIBE_TOOL
    }

    fn description(&self, ctx: &ToolContext<'_>) -> String {
        let mut text = format!(
            "Describe a Rei context token: content type {}, security tier {}.",
            ctx.tag, ctx.tier
        );
        if !ctx.tag.is_text() && !ctx.config.supports_binary {
            text.push_str(" The content is binary and cannot be shown to this model directly.");
        }
        text
    }

    fn parameters_schema(&self, _ctx: &ToolContext<'_>) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "token": { "type": "string", "description": "The encoded context token" }
            },
            "required": ["token"]
        })
    }
}
