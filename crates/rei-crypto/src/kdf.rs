// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic Argon2id key derivation from an input digest.
//!
//! The password is the hex digest; the salt is a fixed, tier-specific domain
//! label, so the same digest and tier always produce the same key while each
//! tier yields an unrelated key. Higher tiers pay a higher Argon2id cost.

use rei_core::{BoxError, DerivedKey, KeyDeriver, SecurityTier};
use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::CryptoError;

/// Argon2id cost parameters for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfCost {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl KdfCost {
    /// Default cost for `tier`.
    pub const fn for_tier(tier: SecurityTier) -> Self {
        match tier {
            SecurityTier::Basic => Self {
                memory_kib: 8 * 1024,
                iterations: 1,
                parallelism: 1,
            },
            SecurityTier::Standard => Self {
                memory_kib: 19 * 1024,
                iterations: 2,
                parallelism: 1,
            },
            SecurityTier::Complex => Self {
                memory_kib: 64 * 1024,
                iterations: 3,
                parallelism: 1,
            },
        }
    }
}

/// Argon2id-backed [`KeyDeriver`].
#[derive(Debug, Clone)]
pub struct Argon2KeyDeriver {
    costs: [KdfCost; 3],
}

impl Default for Argon2KeyDeriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Argon2KeyDeriver {
    pub fn new() -> Self {
        Self {
            costs: [
                KdfCost::for_tier(SecurityTier::Basic),
                KdfCost::for_tier(SecurityTier::Standard),
                KdfCost::for_tier(SecurityTier::Complex),
            ],
        }
    }

    /// Use the same cost for every tier. Tiers still get distinct salts.
    pub fn with_uniform_cost(cost: KdfCost) -> Self {
        Self { costs: [cost; 3] }
    }

    pub fn cost(&self, tier: SecurityTier) -> KdfCost {
        self.costs[tier as usize]
    }

    /// 16-byte salt unique to `tier`.
    pub fn tier_salt(tier: SecurityTier) -> [u8; 16] {
        let hash = Sha256::digest(format!("rei/kdf/v1/{tier}").as_bytes());
        let mut salt = [0u8; 16];
        salt.copy_from_slice(&hash[..16]);
        salt
    }

    fn derive(&self, digest_hex: &str, tier: SecurityTier) -> Result<DerivedKey, CryptoError> {
        if digest_hex.is_empty() || hex::decode(digest_hex).is_err() {
            return Err(CryptoError::InvalidDigest(digest_hex.chars().take(16).collect()));
        }

        let cost = self.cost(tier);
        debug!(%tier, memory_kib = cost.memory_kib, iterations = cost.iterations, "deriving key");
        let params = argon2::Params::new(
            cost.memory_kib,
            cost.iterations,
            cost.parallelism,
            Some(32),
        )
        .map_err(|e| CryptoError::Kdf(format!("invalid Argon2id parameters: {e}")))?;
        let argon2 =
            argon2::Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

        let mut output = Zeroizing::new([0u8; 32]);
        argon2
            .hash_password_into(digest_hex.as_bytes(), &Self::tier_salt(tier), output.as_mut())
            .map_err(|e| CryptoError::Kdf(e.to_string()))?;

        Ok(DerivedKey::from_bytes(*output))
    }
}

impl KeyDeriver for Argon2KeyDeriver {
    fn derive_key(&self, digest_hex: &str, tier: SecurityTier) -> Result<DerivedKey, BoxError> {
        Ok(self.derive(digest_hex, tier)?)
    }
}
