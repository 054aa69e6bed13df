// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cryptographic collaborators for the Rei pipeline.
//!
//! The key for each token is derived from a digest of the canonicalized
//! input, so the same input always yields the same key and, because the
//! cipher uses a synthetic nonce, the same token.

pub mod cipher;
pub mod digest;
pub mod error;
pub mod formatter;
pub mod kdf;

pub use cipher::AesGcmCipher;
pub use digest::{canonical_bytes, digest_hex};
pub use error::CryptoError;
pub use formatter::FixedWidthFormatter;
pub use kdf::{Argon2KeyDeriver, KdfCost};
