// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static compression-hint table keyed by content tag.

use rei_core::{CompressionHint, ContentTag, PreprocessStep, Strategy};

const JSON_HINT: CompressionHint = CompressionHint {
    priority: Strategy::Structure,
    preprocessing: &[PreprocessStep::Minify, PreprocessStep::SortKeys],
    expected_ratio: 0.3,
    dictionary_compression: true,
};

const XML_HINT: CompressionHint = CompressionHint {
    priority: Strategy::Structure,
    preprocessing: &[PreprocessStep::RemoveWhitespace, PreprocessStep::CompressTags],
    expected_ratio: 0.4,
    dictionary_compression: true,
};

const CSV_HINT: CompressionHint = CompressionHint {
    priority: Strategy::Patterns,
    preprocessing: &[PreprocessStep::CompressHeaders, PreprocessStep::NumericEncoding],
    expected_ratio: 0.35,
    dictionary_compression: true,
};

const CODE_HINT: CompressionHint = CompressionHint {
    priority: Strategy::Tokens,
    preprocessing: &[PreprocessStep::Tokenize, PreprocessStep::CompressKeywords],
    expected_ratio: 0.45,
    dictionary_compression: true,
};

const MARKDOWN_HINT: CompressionHint = CompressionHint {
    priority: Strategy::Structure,
    preprocessing: &[PreprocessStep::CompressHeaders, PreprocessStep::LinkShortening],
    expected_ratio: 0.5,
    dictionary_compression: false,
};

const PLAIN_TEXT_HINT: CompressionHint = CompressionHint {
    priority: Strategy::Frequency,
    preprocessing: &[PreprocessStep::WordFrequency],
    expected_ratio: 0.6,
    dictionary_compression: false,
};

/// Hint for every tag without a dedicated entry (YAML and all binary tags).
pub const DEFAULT_HINT: CompressionHint = CompressionHint {
    priority: Strategy::Generic,
    preprocessing: &[],
    expected_ratio: 0.7,
    dictionary_compression: false,
};

/// Compression hints for `tag`. Total: unlisted tags get [`DEFAULT_HINT`].
pub fn hints_for(tag: ContentTag) -> CompressionHint {
    match tag {
        ContentTag::Json => JSON_HINT,
        ContentTag::Xml => XML_HINT,
        ContentTag::Csv => CSV_HINT,
        ContentTag::Code => CODE_HINT,
        ContentTag::Markdown => MARKDOWN_HINT,
        ContentTag::PlainText => PLAIN_TEXT_HINT,
        _ => DEFAULT_HINT,
    }
}
