// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Crypto and formatting error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("digest must be non-empty hex: {0}")]
    InvalidDigest(String),

    #[error("key derivation failed: {0}")]
    Kdf(String),

    #[error("AES-256-GCM encryption failed")]
    Seal,

    /// Wrong key, or the sealed payload was altered.
    #[error("AES-256-GCM decryption failed -- wrong key or corrupted data")]
    Open,

    #[error("sealed payload is {actual} bytes, shorter than the {minimum} byte overhead")]
    SealedTooShort { actual: usize, minimum: usize },

    #[error("sealed payload of {actual} bytes exceeds token capacity of {max} bytes")]
    PayloadTooLarge { actual: usize, max: usize },

    #[error("formatted token is malformed: {0}")]
    Malformed(String),

    #[error("unrecognized token marker `{0}`")]
    UnknownMarker(String),

    #[error("unrecognized {field} code `{code}` in token header")]
    UnknownCode { field: &'static str, code: char },

    #[error("token payload is not valid base64: {0}")]
    PayloadEncoding(#[from] base64::DecodeError),
}
