// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Rei context compression pipeline.
//!
//! This crate provides the error taxonomy, the domain types that flow between
//! pipeline stages, the fixed-width token constants, and the collaborator
//! traits every stage implementation plugs into.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{BoxError, CompressionError, ReiError, Stage, ValidationError};
pub use types::{
    CompressionHint, ContentFamily, ContentTag, DecodedOutput, DerivedKey, DescriptorEntry,
    EncodedToken, Fidelity, ModelCapabilities, NormalizedFrame, PipelineConfig, PreprocessStep,
    RawInput, ReconstructionDescriptor, SecurityTier, Strategy, TokenMetadata, ToolDialect,
};

// Re-export all collaborator traits at crate root.
pub use traits::{
    CapabilityProvider, Cipher, ContentTransform, DescriptorGenerator, KeyDeriver,
    SizeNormalizer, TokenFormatter,
};

/// Width of every encoded token, in characters.
pub const TOKEN_WIDTH: usize = 128;

/// Width of the token header carrying the format marker, tag code and tier code.
pub const TOKEN_HEADER_WIDTH: usize = 4;

/// Width of the token payload region.
pub const TOKEN_PAYLOAD_WIDTH: usize = TOKEN_WIDTH - TOKEN_HEADER_WIDTH;

/// Largest sealed (encrypted) payload the token payload region can carry.
///
/// 124 base64 characters without padding decode to exactly 93 bytes.
pub const MAX_SEALED_BYTES: usize = TOKEN_PAYLOAD_WIDTH * 6 / 8;

/// Bytes the cipher adds to a plaintext: 96-bit nonce plus 128-bit tag.
pub const SEAL_OVERHEAD: usize = 12 + 16;

/// Largest normalized plaintext that still fits in a token once sealed.
pub const PAYLOAD_CAPACITY: usize = MAX_SEALED_BYTES - SEAL_OVERHEAD;

/// Default input size ceiling enforced by validation.
pub const DEFAULT_MAX_INPUT_SIZE: usize = 500_000_000;

/// Default base for the size-normalization target, scaled by token efficiency.
pub const DEFAULT_NORMALIZATION_BASE: usize = 512;

/// Smallest size-normalization target a compressor accepts. Leaves room for a
/// frame header and a few bytes of content.
pub const MIN_NORMALIZATION_TARGET: usize = 8;
