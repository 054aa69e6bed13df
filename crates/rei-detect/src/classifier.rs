// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic content-type classification.
//!
//! Bytes are matched against magic-number signatures only. Structured values
//! are JSON by construction. Text walks [`TEXT_PREDICATES`] in order and takes
//! the first tag whose predicate holds; several predicates overlap (JSON
//! objects also contain colons), so the order is part of the contract.

use std::sync::LazyLock;

use regex::Regex;
use rei_core::{ContentTag, RawInput};

/// A named text predicate.
pub type TextPredicate = fn(&str) -> bool;

/// Text predicates in evaluation order. The last entry always matches.
pub const TEXT_PREDICATES: &[(ContentTag, TextPredicate)] = &[
    (ContentTag::Json, is_json),
    (ContentTag::Xml, is_xml),
    (ContentTag::Csv, is_csv),
    (ContentTag::Yaml, is_yaml),
    (ContentTag::Code, is_code),
    (ContentTag::Markdown, is_markdown),
    (ContentTag::PlainText, is_plain_text),
];

/// Magic-number prefixes for binary input, checked in order.
pub const BINARY_SIGNATURES: &[(&[u8], ContentTag)] = &[
    (b"\x89PNG", ContentTag::Png),
    (b"\xff\xd8\xff", ContentTag::Jpeg),
    (b"GIF8", ContentTag::Gif),
    (b"PK", ContentTag::Zip),
    (b"%PDF", ContentTag::Pdf),
];

/// Candidate CSV delimiters, checked in order.
const CSV_DELIMITERS: &[char] = &[',', ';', '\t', '|'];

/// Lines after the header compared against the header's delimiter count.
const CSV_SAMPLE_LINES: usize = 4;

/// Leading non-empty lines inspected for YAML markers.
const YAML_SAMPLE_LINES: usize = 5;

const YAML_INDICATORS: &[&str] = &["---", ":", "- "];

/// Keyword fragments that mark source code.
const CODE_INDICATORS: &[&str] = &[
    "def ", "class ", "import ", "from ", // Python
    "function ", "const ", "let ", "var ", // JavaScript
    "public ", "private ", "static ", // Java/C#
    "#include", "int main", // C/C++
    "<?php", "<?=", // PHP
];

static MARKDOWN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Headings
        r"(?m)^#+\s",
        // Bullets
        r"(?m)^\*\s",
        // Numbered lists
        r"(?m)^\d+\.\s",
        // Links
        r"\[.*\]\(.*\)",
        // Bold
        r"\*\*.*\*\*",
        // Fenced code
        r"```",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Assign exactly one content tag to `input`.
pub fn classify(input: &RawInput) -> ContentTag {
    match input {
        RawInput::Bytes(bytes) => classify_bytes(bytes),
        RawInput::Text(text) => classify_text(text),
        RawInput::Structured(serde_json::Value::Object(_) | serde_json::Value::Array(_)) => {
            ContentTag::Json
        }
        RawInput::Structured(serde_json::Value::String(text)) => classify_text(text),
        RawInput::Structured(scalar) => classify_text(&scalar.to_string()),
    }
}

/// Match a byte prefix against [`BINARY_SIGNATURES`].
pub fn classify_bytes(bytes: &[u8]) -> ContentTag {
    BINARY_SIGNATURES
        .iter()
        .find(|(magic, _)| bytes.starts_with(magic))
        .map(|(_, tag)| *tag)
        .unwrap_or(ContentTag::OctetStream)
}

/// First tag in [`TEXT_PREDICATES`] whose predicate holds for `text`.
pub fn classify_text(text: &str) -> ContentTag {
    TEXT_PREDICATES
        .iter()
        .find(|(_, predicate)| predicate(text))
        .map(|(tag, _)| *tag)
        .unwrap_or(ContentTag::PlainText)
}

pub fn is_json(text: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(text).is_ok()
}

pub fn is_xml(text: &str) -> bool {
    let text = text.trim();
    text.starts_with("<?xml") || (text.starts_with('<') && text.ends_with('>'))
}

/// At least two lines, and some delimiter appears in the first line with every
/// following sampled line within one occurrence of the first line's count.
pub fn is_csv(text: &str) -> bool {
    let lines: Vec<&str> = text.trim().split('\n').collect();
    if lines.len() < 2 {
        return false;
    }

    CSV_DELIMITERS.iter().any(|&delimiter| {
        let header_count = lines[0].matches(delimiter).count();
        header_count > 0
            && lines[1..]
                .iter()
                .take(CSV_SAMPLE_LINES)
                .all(|line| line.matches(delimiter).count().abs_diff(header_count) <= 1)
    })
}

pub fn is_yaml(text: &str) -> bool {
    text.trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(YAML_SAMPLE_LINES)
        .any(|line| YAML_INDICATORS.iter().any(|marker| line.contains(marker)))
}

pub fn is_code(text: &str) -> bool {
    CODE_INDICATORS.iter().any(|marker| text.contains(marker))
}

pub fn is_markdown(text: &str) -> bool {
    MARKDOWN_PATTERNS.iter().any(|pattern| pattern.is_match(text))
}

pub fn is_plain_text(_text: &str) -> bool {
    true
}
