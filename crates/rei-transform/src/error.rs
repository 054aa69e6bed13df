// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transform error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// Text-family input was not valid UTF-8.
    #[error("text content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A packed buffer began with an unrecognized mode byte.
    #[error("unknown {what} mode byte {mode:#04x}")]
    UnknownMode { what: &'static str, mode: u8 },

    /// A packed buffer or frame was shorter than its header.
    #[error("{what} is truncated: expected at least {expected} bytes, got {actual}")]
    TooShort {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An exact frame's length field disagrees with its data.
    #[error("frame length mismatch: header says {declared} bytes, frame carries {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    /// The normalization budget cannot hold even a frame header.
    #[error("normalization budget of {budget} bytes is below the {header} byte frame header")]
    BudgetTooSmall { budget: usize, header: usize },

    /// Transformed content is too large to describe in a frame header.
    #[error("transformed content of {0} bytes exceeds the frame length field")]
    Oversized(usize),

    #[error("deflate stream error: {0}")]
    Io(#[from] std::io::Error),
}
