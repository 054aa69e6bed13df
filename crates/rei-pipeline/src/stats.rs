// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only size and ratio report.

use rei_core::{ContentTag, RawInput, SecurityTier, TOKEN_WIDTH};
use rei_detect::{classify, hints_for};
use serde::Serialize;

/// What encoding an input would produce, without encoding it.
///
/// `compression_ratio` compares sizes only; it says nothing about how much
/// of the input survives the fixed-width token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub original_size: usize,
    pub tag: ContentTag,
    pub expected_token_size: usize,
    /// `expected_token_size / original_size`, or 0 for empty input.
    pub compression_ratio: f64,
    /// Static expected ratio of the tag's content transform.
    pub estimated_ratio: f64,
    pub model: String,
    pub security_tier: SecurityTier,
}

impl Stats {
    /// Report for `input` under `model` and `tier`. Never fails.
    pub fn measure(input: &RawInput, model: &str, tier: SecurityTier) -> Self {
        let tag = classify(input);
        let original_size = measured_size(input);
        let compression_ratio = if original_size == 0 {
            0.0
        } else {
            TOKEN_WIDTH as f64 / original_size as f64
        };

        Self {
            original_size,
            tag,
            expected_token_size: TOKEN_WIDTH,
            compression_ratio,
            estimated_ratio: hints_for(tag).expected_ratio,
            model: model.to_string(),
            security_tier: tier,
        }
    }
}

/// Size used for reporting. Scalars have no collection size, so their JSON
/// rendering is measured instead.
fn measured_size(input: &RawInput) -> usize {
    match (input.size(), input) {
        (Some(size), _) => size,
        (None, RawInput::Structured(value)) => value.to_string().chars().count(),
        (None, _) => 0,
    }
}
