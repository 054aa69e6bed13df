// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Rei compression pipeline.
//!
//! Two families exist: [`ValidationError`] for problems with the caller's
//! input, and [`CompressionError`] for failures inside the pipeline. Both
//! surface to callers through [`ReiError`].

use strum::Display;
use thiserror::Error;

/// Boxed error returned by collaborator trait implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The primary error type returned by the public pipeline API.
#[derive(Debug, Error)]
pub enum ReiError {
    /// The caller's input was rejected before any transform ran.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A pipeline stage failed during encode or decode.
    #[error(transparent)]
    Compression(#[from] CompressionError),

    /// The orchestrator was constructed for a model the capability provider
    /// does not know.
    #[error("unsupported model `{model}`; supported models: {}", supported.join(", "))]
    UnsupportedModel {
        model: String,
        supported: Vec<String>,
    },

    /// Configuration could not be turned into a working pipeline.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Caller-input problems. Always recoverable by fixing the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input was null.
    #[error("input must not be null")]
    MissingInput,

    /// The input's measurable size exceeds the configured ceiling.
    #[error("input size {size} exceeds maximum allowed size of {limit}")]
    TooLarge { size: usize, limit: usize },

    /// The input was classified as structured data but does not parse.
    #[error("invalid structured input: {reason}")]
    MalformedStructured { reason: String },
}

/// Pipeline stages, named in the order the encode and decode paths run them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    Transform,
    Normalize,
    DeriveKey,
    Encrypt,
    Format,
    Describe,
    ParseToken,
    Decrypt,
    Denormalize,
    InverseTransform,
}

/// Pipeline-internal failures.
#[derive(Debug, Error)]
pub enum CompressionError {
    /// A stage failed; `source` is the original cause.
    #[error("{stage} stage failed: {source}")]
    Stage { stage: Stage, source: BoxError },

    /// No descriptor entry carried a decryption key.
    #[error("decryption key not found in reconstruction descriptor")]
    KeyNotFound,

    /// A token could not be parsed back into its fields.
    #[error("invalid token: {reason}")]
    InvalidToken { reason: String },
}

impl CompressionError {
    /// Returns a closure that wraps a collaborator error as a failure of `stage`.
    ///
    /// Intended for `map_err` at each stage boundary of the orchestrator.
    pub fn at<E>(stage: Stage) -> impl FnOnce(E) -> Self
    where
        E: Into<BoxError>,
    {
        move |source| CompressionError::Stage {
            stage,
            source: source.into(),
        }
    }

    /// The stage that failed, if this error came from a stage.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            CompressionError::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
