// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Target-model table for the Rei pipeline.
//!
//! Each supported model has a capability record, which drives pipeline
//! configuration, and a tool-call dialect, which decides how reconstruction
//! descriptors are rendered for it.

pub mod registry;

pub use rei_core::ToolDialect;
pub use registry::{ModelProfile, ModelRegistry, SUPPORTED_MODELS};
