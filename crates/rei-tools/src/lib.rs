// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reconstruction descriptors for Rei tokens.
//!
//! A descriptor is the set of tool declarations a model needs to turn a token
//! back into context: decrypt, decompress, describe. Each declaration is
//! rendered in the target model's native tool-call dialect. The decrypt entry
//! carries the token key in a typed field rather than in free text.

pub mod builtin;
pub mod generator;
pub mod tool;

pub use generator::{ToolDescriptorGenerator, KEY_DISCLOSURE};
pub use tool::{ReconstructionTool, ToolContext};

/// Name of the entry that carries the decryption key.
pub const DECRYPT_TOOL: &str = "rei_decrypt_context";
pub const DECOMPRESS_TOOL: &str = "rei_decompress_context";
pub const DESCRIBE_TOOL: &str = "rei_describe_context";
