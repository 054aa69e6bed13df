// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Order-independent SHA-256 digest of an input.
//!
//! Structured values, and text that parses as structured data, are
//! re-serialized compactly with every object's keys sorted before hashing.
//! `{"b":1,"a":2}` as text and `{"a": 2, "b": 1}` as a value therefore
//! digest identically. A structured string value digests as its text.

use std::borrow::Cow;

use rei_core::RawInput;
use sha2::{Digest, Sha256};

/// Bytes that are hashed for `input`.
pub fn canonical_bytes(input: &RawInput) -> Cow<'_, [u8]> {
    match input {
        RawInput::Bytes(bytes) => Cow::Borrowed(bytes),
        RawInput::Structured(serde_json::Value::String(text)) | RawInput::Text(text) => {
            text_bytes(text)
        }
        RawInput::Structured(value) => Cow::Owned(canonical_json(value).into_bytes()),
    }
}

fn text_bytes(text: &str) -> Cow<'_, [u8]> {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => Cow::Owned(canonical_json(&value).into_bytes()),
        Err(_) => Cow::Borrowed(text.as_bytes()),
    }
}

/// Lowercase hex SHA-256 of the canonical bytes.
pub fn digest_hex(input: &RawInput) -> String {
    hex::encode(Sha256::digest(canonical_bytes(input)))
}

/// Compact JSON with recursively sorted object keys.
///
/// Sorting is done explicitly so the result does not depend on whether
/// `serde_json` was built with `preserve_order`.
pub fn canonical_json(value: &serde_json::Value) -> String {
    sort_keys(value).to_string()
}

fn sort_keys(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), sort_keys(v)))
                    .collect(),
            )
        }
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(sort_keys).collect())
        }
        other => other.clone(),
    }
}
