// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content-adaptive and size-normalizing transform traits.

use crate::error::BoxError;
use crate::types::{CompressionHint, ContentTag, NormalizedFrame};

/// A paired, content-type-aware transform with a defined inverse.
pub trait ContentTransform: Send + Sync {
    /// Reduces `data` according to the tag and its compression hints.
    fn transform(
        &self,
        data: &[u8],
        tag: ContentTag,
        hints: &CompressionHint,
    ) -> Result<Vec<u8>, BoxError>;

    /// Reverses [`transform`](Self::transform) for the same tag.
    fn inverse_transform(&self, data: &[u8], tag: ContentTag) -> Result<Vec<u8>, BoxError>;
}

/// Bounds transformed bytes to a target size before encryption.
pub trait SizeNormalizer: Send + Sync {
    /// Produces a frame of at most `target_size` bytes.
    fn normalize(&self, data: &[u8], target_size: usize) -> Result<Vec<u8>, BoxError>;

    /// Recovers the data carried by a frame and whether it was cut short.
    fn denormalize(&self, frame: &[u8]) -> Result<NormalizedFrame, BoxError>;
}
