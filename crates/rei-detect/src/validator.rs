// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input gate run before any transform.
//!
//! Validation never mutates the input. A successful check returns a
//! [`ValidatedInput`] that later stages take as proof the gate passed.

use rei_core::{ContentTag, RawInput, ValidationError, DEFAULT_MAX_INPUT_SIZE};
use tracing::debug;

/// An input that passed validation for a specific tag.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedInput<'a> {
    input: &'a RawInput,
    tag: ContentTag,
    size: Option<usize>,
}

impl<'a> ValidatedInput<'a> {
    pub fn input(&self) -> &'a RawInput {
        self.input
    }

    pub fn tag(&self) -> ContentTag {
        self.tag
    }

    /// The measured size, if the input has one.
    pub fn size(&self) -> Option<usize> {
        self.size
    }
}

/// Enforces the size ceiling and structured-data well-formedness.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    max_size: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Validator with the default 500,000,000-unit ceiling.
    pub fn new() -> Self {
        Self {
            max_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }

    pub fn with_limit(max_size: usize) -> Self {
        Self { max_size }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Check `input` against the ceiling and, for JSON-tagged input, the
    /// JSON grammar.
    pub fn validate<'a>(
        &self,
        input: &'a RawInput,
        tag: ContentTag,
    ) -> Result<ValidatedInput<'a>, ValidationError> {
        if input.is_absent() {
            return Err(ValidationError::MissingInput);
        }

        let size = input.size();
        if let Some(size) = size
            && size > self.max_size
        {
            return Err(ValidationError::TooLarge {
                size,
                limit: self.max_size,
            });
        }

        if tag == ContentTag::Json {
            check_json(input)?;
        }

        debug!(%tag, ?size, "input validated");
        Ok(ValidatedInput { input, tag, size })
    }
}

/// Only text can be tagged JSON without already being a parsed value.
fn check_json(input: &RawInput) -> Result<(), ValidationError> {
    let RawInput::Text(text) = input else {
        return Ok(());
    };
    serde_json::from_str::<serde::de::IgnoredAny>(text)
        .map(|_| ())
        .map_err(|e| ValidationError::MalformedStructured {
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_input_is_rejected() {
        let input = RawInput::Structured(serde_json::Value::Null);
        assert_eq!(
            Validator::new().validate(&input, ContentTag::Json).unwrap_err(),
            ValidationError::MissingInput
        );
    }

    #[test]
    fn ceiling_is_inclusive() {
        let validator = Validator::with_limit(10);
        let at_limit = RawInput::from("a".repeat(10));
        let over = RawInput::from("a".repeat(11));

        assert!(validator.validate(&at_limit, ContentTag::PlainText).is_ok());
        assert_eq!(
            validator.validate(&over, ContentTag::PlainText).unwrap_err(),
            ValidationError::TooLarge { size: 11, limit: 10 }
        );
    }

    #[test]
    fn text_size_counts_characters() {
        let validator = Validator::with_limit(3);
        // Six bytes, three characters.
        let input = RawInput::from("ééé");
        let validated = validator.validate(&input, ContentTag::PlainText).unwrap();
        assert_eq!(validated.size(), Some(3));
    }

    #[test]
    fn default_ceiling_boundary_on_bytes() {
        let validator = Validator::new();
        let at_limit = RawInput::Bytes(vec![0u8; DEFAULT_MAX_INPUT_SIZE]);
        assert!(validator.validate(&at_limit, ContentTag::OctetStream).is_ok());
        drop(at_limit);

        let over = RawInput::Bytes(vec![0u8; DEFAULT_MAX_INPUT_SIZE + 1]);
        assert!(matches!(
            validator.validate(&over, ContentTag::OctetStream),
            Err(ValidationError::TooLarge { .. })
        ));
    }

    #[test]
    fn structured_size_counts_entries() {
        let validator = Validator::with_limit(2);
        let input = RawInput::from(json!([1, 2, 3]));
        assert!(matches!(
            validator.validate(&input, ContentTag::Json),
            Err(ValidationError::TooLarge { size: 3, limit: 2 })
        ));
    }

    #[test]
    fn malformed_json_is_rejected_only_for_json_tag() {
        let input = RawInput::from("{not json");
        let validator = Validator::new();
        assert!(matches!(
            validator.validate(&input, ContentTag::Json),
            Err(ValidationError::MalformedStructured { .. })
        ));
        assert!(validator.validate(&input, ContentTag::PlainText).is_ok());
    }

    #[test]
    fn scalars_have_no_size_and_pass() {
        let input = RawInput::from(json!(12345));
        let validated = Validator::with_limit(1)
            .validate(&input, ContentTag::Json)
            .unwrap();
        assert_eq!(validated.size(), None);
        assert_eq!(validated.tag(), ContentTag::Json);
    }
}
