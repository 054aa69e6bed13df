// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-width token layout.
//!
//! ```text
//! R1 <tag> <tier> <payload: URL-safe base64, right-filled with '.'>
//! 0  2     3      4                                            128
//! ```
//!
//! The header is readable without the key; the payload is the sealed frame.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rei_core::{
    BoxError, ContentTag, EncodedToken, MAX_SEALED_BYTES, SecurityTier, TOKEN_HEADER_WIDTH,
    TOKEN_PAYLOAD_WIDTH, TokenFormatter, TokenMetadata,
};

use crate::error::CryptoError;

/// Format marker at the start of every token.
pub const TOKEN_MARKER: &str = "R1";

const FILL: char = '.';

static TAG_CODES: &[(ContentTag, char)] = &[
    (ContentTag::Json, 'j'),
    (ContentTag::Xml, 'x'),
    (ContentTag::Csv, 'c'),
    (ContentTag::Yaml, 'y'),
    (ContentTag::Code, 's'),
    (ContentTag::Markdown, 'm'),
    (ContentTag::PlainText, 't'),
    (ContentTag::Png, 'P'),
    (ContentTag::Jpeg, 'J'),
    (ContentTag::Gif, 'G'),
    (ContentTag::Zip, 'Z'),
    (ContentTag::Pdf, 'F'),
    (ContentTag::OctetStream, 'B'),
];

static TIER_CODES: &[(SecurityTier, char)] = &[
    (SecurityTier::Basic, 'b'),
    (SecurityTier::Standard, 's'),
    (SecurityTier::Complex, 'c'),
];

fn code_for<T: PartialEq + Copy>(table: &[(T, char)], value: T) -> char {
    table
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, c)| *c)
        .unwrap_or('?')
}

fn value_for<T: Copy>(table: &[(T, char)], code: char, field: &'static str) -> Result<T, CryptoError> {
    table
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(v, _)| *v)
        .ok_or(CryptoError::UnknownCode { field, code })
}

/// Single-character header code for `tag`.
pub fn tag_code(tag: ContentTag) -> char {
    code_for(TAG_CODES, tag)
}

/// Single-character header code for `tier`.
pub fn tier_code(tier: SecurityTier) -> char {
    code_for(TIER_CODES, tier)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWidthFormatter;

impl FixedWidthFormatter {
    pub fn new() -> Self {
        Self
    }

    fn pack(
        &self,
        sealed: &[u8],
        tag: ContentTag,
        tier: SecurityTier,
    ) -> Result<EncodedToken, CryptoError> {
        if sealed.len() > MAX_SEALED_BYTES {
            return Err(CryptoError::PayloadTooLarge {
                actual: sealed.len(),
                max: MAX_SEALED_BYTES,
            });
        }

        let mut token = String::with_capacity(TOKEN_HEADER_WIDTH + TOKEN_PAYLOAD_WIDTH);
        token.push_str(TOKEN_MARKER);
        token.push(tag_code(tag));
        token.push(tier_code(tier));

        let payload = URL_SAFE_NO_PAD.encode(sealed);
        token.push_str(&payload);
        token.extend(std::iter::repeat_n(FILL, TOKEN_PAYLOAD_WIDTH - payload.len()));

        EncodedToken::parse(token).map_err(|e| CryptoError::Malformed(e.to_string()))
    }

    fn header(&self, token: &EncodedToken) -> Result<TokenMetadata, CryptoError> {
        let header = &token.as_str()[..TOKEN_HEADER_WIDTH];
        if !header.starts_with(TOKEN_MARKER) {
            return Err(CryptoError::UnknownMarker(header[..TOKEN_MARKER.len()].to_string()));
        }

        let mut codes = header[TOKEN_MARKER.len()..].chars();
        let tag = codes.next().unwrap_or(FILL);
        let tier = codes.next().unwrap_or(FILL);

        Ok(TokenMetadata {
            tag: value_for(TAG_CODES, tag, "tag")?,
            tier: value_for(TIER_CODES, tier, "tier")?,
        })
    }

    fn payload(&self, token: &EncodedToken) -> Result<Vec<u8>, CryptoError> {
        self.header(token)?;
        let encoded = token.as_str()[TOKEN_HEADER_WIDTH..].trim_end_matches(FILL);
        Ok(URL_SAFE_NO_PAD.decode(encoded)?)
    }
}

impl TokenFormatter for FixedWidthFormatter {
    fn format(
        &self,
        ciphertext: &[u8],
        tag: ContentTag,
        tier: SecurityTier,
    ) -> Result<EncodedToken, BoxError> {
        Ok(self.pack(ciphertext, tag, tier)?)
    }

    fn extract_metadata(&self, token: &EncodedToken) -> Result<TokenMetadata, BoxError> {
        Ok(self.header(token)?)
    }

    fn extract_payload(&self, token: &EncodedToken) -> Result<Vec<u8>, BoxError> {
        Ok(self.payload(token)?)
    }
}
