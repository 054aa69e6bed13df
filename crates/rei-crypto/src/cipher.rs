// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AES-256-GCM sealing with a synthetic nonce.
//!
//! The 96-bit nonce is an HMAC-SHA256 of the plaintext under a subkey of the
//! encryption key. Identical (key, plaintext) pairs produce identical output,
//! and two distinct plaintexts under one key get distinct nonces.
//!
//! Sealed layout: `[nonce 12][ciphertext][tag 16]`.

use ring::aead::{Aad, LessSafeKey, Nonce, UnboundKey, AES_256_GCM, NONCE_LEN};
use ring::hmac;
use rei_core::{BoxError, Cipher, DerivedKey, SEAL_OVERHEAD};
use sha2::{Digest, Sha256};

use crate::error::CryptoError;

/// Domain label for the nonce subkey.
const NONCE_KEY_LABEL: &[u8] = b"rei/siv-nonce/v1";

#[derive(Debug, Clone, Copy, Default)]
pub struct AesGcmCipher;

impl AesGcmCipher {
    pub fn new() -> Self {
        Self
    }

    fn aead_key(key: &DerivedKey) -> Result<LessSafeKey, CryptoError> {
        let unbound = UnboundKey::new(&AES_256_GCM, key.as_bytes()).map_err(|_| CryptoError::Seal)?;
        Ok(LessSafeKey::new(unbound))
    }

    /// Deterministic nonce for `plaintext` under `key`.
    fn synthetic_nonce(key: &DerivedKey, plaintext: &[u8]) -> [u8; NONCE_LEN] {
        let mut hasher = Sha256::new();
        hasher.update(NONCE_KEY_LABEL);
        hasher.update(key.as_bytes());
        let subkey = hmac::Key::new(hmac::HMAC_SHA256, &hasher.finalize());

        let tag = hmac::sign(&subkey, plaintext);
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&tag.as_ref()[..NONCE_LEN]);
        nonce
    }

    /// Encrypt `plaintext`, returning `nonce || ciphertext || tag`.
    pub fn seal(&self, key: &DerivedKey, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let aead = Self::aead_key(key)?;
        let nonce_bytes = Self::synthetic_nonce(key, plaintext);

        let mut in_out = plaintext.to_vec();
        aead.seal_in_place_append_tag(
            Nonce::assume_unique_for_key(nonce_bytes),
            Aad::empty(),
            &mut in_out,
        )
        .map_err(|_| CryptoError::Seal)?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + in_out.len());
        sealed.extend_from_slice(&nonce_bytes);
        sealed.extend_from_slice(&in_out);
        Ok(sealed)
    }

    /// Decrypt output of [`seal`](Self::seal).
    pub fn open(&self, key: &DerivedKey, sealed: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if sealed.len() < SEAL_OVERHEAD {
            return Err(CryptoError::SealedTooShort {
                actual: sealed.len(),
                minimum: SEAL_OVERHEAD,
            });
        }

        let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
        let nonce = Nonce::try_assume_unique_for_key(nonce_bytes).map_err(|_| CryptoError::Open)?;

        let aead = Self::aead_key(key)?;
        let mut in_out = ciphertext.to_vec();
        let plaintext = aead
            .open_in_place(nonce, Aad::empty(), &mut in_out)
            .map_err(|_| CryptoError::Open)?;
        Ok(plaintext.to_vec())
    }
}

impl Cipher for AesGcmCipher {
    fn encrypt(&self, plaintext: &[u8], key: &DerivedKey) -> Result<Vec<u8>, BoxError> {
        Ok(self.seal(key, plaintext)?)
    }

    fn decrypt(&self, ciphertext: &[u8], key: &DerivedKey) -> Result<Vec<u8>, BoxError> {
        Ok(self.open(key, ciphertext)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(byte: u8) -> DerivedKey {
        DerivedKey::from_bytes([byte; 32])
    }

    #[test]
    fn seal_open_roundtrip() {
        let cipher = AesGcmCipher::new();
        let sealed = cipher.seal(&key(1), b"context frame").unwrap();
        assert_eq!(cipher.open(&key(1), &sealed).unwrap(), b"context frame");
    }

    #[test]
    fn sealing_is_deterministic() {
        let cipher = AesGcmCipher::new();
        let a = cipher.seal(&key(2), b"same input twice").unwrap();
        let b = cipher.seal(&key(2), b"same input twice").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_plaintexts_get_distinct_nonces() {
        let cipher = AesGcmCipher::new();
        let a = cipher.seal(&key(3), b"first").unwrap();
        let b = cipher.seal(&key(3), b"second").unwrap();
        assert_ne!(a[..NONCE_LEN], b[..NONCE_LEN]);
    }

    #[test]
    fn overhead_is_nonce_plus_tag() {
        let sealed = AesGcmCipher::new().seal(&key(4), b"hello").unwrap();
        assert_eq!(sealed.len(), 5 + SEAL_OVERHEAD);
    }

    #[test]
    fn open_with_wrong_key_fails() {
        let cipher = AesGcmCipher::new();
        let sealed = cipher.seal(&key(5), b"secret").unwrap();
        assert!(matches!(cipher.open(&key(6), &sealed), Err(CryptoError::Open)));
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let cipher = AesGcmCipher::new();
        let mut sealed = cipher.seal(&key(7), b"do not tamper").unwrap();
        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;
        assert!(cipher.open(&key(7), &sealed).is_err());
    }

    #[test]
    fn short_input_is_rejected() {
        assert!(matches!(
            AesGcmCipher::new().open(&key(8), &[0u8; 10]),
            Err(CryptoError::SealedTooShort { actual: 10, .. })
        ));
    }
}
