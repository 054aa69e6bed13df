// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-width token formatter trait.

use crate::error::BoxError;
use crate::types::{ContentTag, EncodedToken, SecurityTier, TokenMetadata};

/// Packs ciphertext and marker fields into a fixed-width token.
pub trait TokenFormatter: Send + Sync {
    fn format(
        &self,
        ciphertext: &[u8],
        tag: ContentTag,
        tier: SecurityTier,
    ) -> Result<EncodedToken, BoxError>;

    /// Reads the marker fields. Must not require the key.
    fn extract_metadata(&self, token: &EncodedToken) -> Result<TokenMetadata, BoxError>;

    /// Returns the ciphertext carried by the token.
    fn extract_payload(&self, token: &EncodedToken) -> Result<Vec<u8>, BoxError>;
}
