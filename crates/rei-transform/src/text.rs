// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text-family transform.
//!
//! Preprocessing only applies steps that preserve meaning for the tag: JSON
//! is minified with sorted keys, and whitespace between XML tags is dropped.
//! Every other text is compressed verbatim, so it round-trips byte-exactly.

use std::sync::LazyLock;

use flate2::Compression;
use regex::Regex;
use rei_core::{BoxError, CompressionHint, ContentTag, ContentTransform, PreprocessStep, Strategy};

use crate::codec;
use crate::error::TransformError;

/// Whitespace runs between a closing `>` and the next `<`.
static INTER_TAG_WHITESPACE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r">\s+<").ok());

/// Text transform: preprocessing plus DEFLATE.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTransformer;

impl TextTransformer {
    pub fn new() -> Self {
        Self
    }

    /// Apply the meaning-preserving preprocessing steps named by `hints`.
    pub fn preprocess(text: &str, tag: ContentTag, hints: &CompressionHint) -> String {
        match tag {
            ContentTag::Json if hints.has_step(PreprocessStep::Minify) => minify_json(text),
            ContentTag::Xml if hints.has_step(PreprocessStep::RemoveWhitespace) => {
                match INTER_TAG_WHITESPACE.as_ref() {
                    Some(pattern) => pattern.replace_all(text.trim(), "><").into_owned(),
                    None => text.to_string(),
                }
            }
            _ => text.to_string(),
        }
    }

    fn level(priority: Strategy) -> Compression {
        match priority {
            Strategy::Structure | Strategy::Patterns => Compression::best(),
            Strategy::Tokens | Strategy::Frequency | Strategy::Generic => Compression::default(),
        }
    }
}

/// Re-serialize JSON compactly. Keys come out sorted because `serde_json`
/// maps are ordered by key. Unparseable text is returned unchanged.
fn minify_json(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .map(|value| value.to_string())
        .unwrap_or_else(|_| text.to_string())
}

impl ContentTransform for TextTransformer {
    fn transform(
        &self,
        data: &[u8],
        tag: ContentTag,
        hints: &CompressionHint,
    ) -> Result<Vec<u8>, BoxError> {
        let text = std::str::from_utf8(data).map_err(TransformError::from)?;
        let prepared = Self::preprocess(text, tag, hints);
        Ok(codec::pack(prepared.as_bytes(), Self::level(hints.priority))?)
    }

    fn inverse_transform(&self, data: &[u8], _tag: ContentTag) -> Result<Vec<u8>, BoxError> {
        Ok(codec::unpack(data)?)
    }
}

#[cfg(test)]
mod tests {
    use rei_detect::hints_for;

    use super::*;

    fn round_trip(text: &str, tag: ContentTag) -> String {
        let t = TextTransformer::new();
        let packed = t.transform(text.as_bytes(), tag, &hints_for(tag)).unwrap();
        String::from_utf8(t.inverse_transform(&packed, tag).unwrap()).unwrap()
    }

    #[test]
    fn json_is_minified_with_sorted_keys() {
        let text = "{ \"b\": 1,\n  \"a\": [1, 2] }";
        assert_eq!(round_trip(text, ContentTag::Json), r#"{"a":[1,2],"b":1}"#);
    }

    #[test]
    fn xml_drops_inter_tag_whitespace() {
        let text = "<root>\n  <item>a b</item>\n</root>\n";
        assert_eq!(
            round_trip(text, ContentTag::Xml),
            "<root><item>a b</item></root>"
        );
    }

    #[test]
    fn other_text_round_trips_exactly() {
        let text = "# Title\n\n  indented line  \ntrailing\t\n";
        assert_eq!(round_trip(text, ContentTag::Markdown), text);
        assert_eq!(round_trip(text, ContentTag::PlainText), text);
    }

    #[test]
    fn repetitive_text_shrinks() {
        let text = "name,value\n".repeat(200);
        let packed = TextTransformer::new()
            .transform(text.as_bytes(), ContentTag::Csv, &hints_for(ContentTag::Csv))
            .unwrap();
        assert!(packed.len() < text.len() / 10);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let err = TextTransformer::new()
            .transform(&[0xff, 0xfe], ContentTag::PlainText, &hints_for(ContentTag::PlainText))
            .unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }
}
