// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key derivation and symmetric cipher traits.

use crate::error::BoxError;
use crate::types::{DerivedKey, SecurityTier};

/// Derives an encryption key from an input digest.
///
/// Implementations must be pure: the same digest and tier always yield the
/// same key.
pub trait KeyDeriver: Send + Sync {
    fn derive_key(&self, digest_hex: &str, tier: SecurityTier) -> Result<DerivedKey, BoxError>;
}

/// Symmetric, key-dependent encryption.
pub trait Cipher: Send + Sync {
    fn encrypt(&self, plaintext: &[u8], key: &DerivedKey) -> Result<Vec<u8>, BoxError>;

    /// Fails when the key is wrong or the ciphertext was altered.
    fn decrypt(&self, ciphertext: &[u8], key: &DerivedKey) -> Result<Vec<u8>, BoxError>;
}
