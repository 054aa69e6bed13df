// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content classification and input validation.
//!
//! The classifier assigns exactly one [`ContentTag`](rei_core::ContentTag) to
//! an input by first-match-wins evaluation of an ordered predicate table. The
//! validator gates inputs before any transform runs.

pub mod classifier;
pub mod hints;
pub mod validator;

pub use classifier::{classify, classify_bytes, classify_text};
pub use hints::{hints_for, DEFAULT_HINT};
pub use validator::{ValidatedInput, Validator};
