// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot convenience entry point.

use rei_core::{EncodedToken, RawInput, ReconstructionDescriptor, ReiError};

use crate::orchestrator::Compressor;

/// Encode `input` for `model` with a freshly built [`Compressor`].
///
/// Callers encoding more than once should build a [`Compressor`] and reuse
/// it.
pub fn compress_context(
    input: impl Into<RawInput>,
    model: &str,
) -> Result<(EncodedToken, ReconstructionDescriptor), ReiError> {
    Compressor::new(model)?.encode(&input.into())
}
