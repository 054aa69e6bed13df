// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default transform collaborators for the Rei pipeline.
//!
//! - [`TextTransformer`]: hint-driven preprocessing followed by DEFLATE.
//! - [`BinaryTransformer`]: DEFLATE, or storage for formats that are already
//!   compressed.
//! - [`FrameNormalizer`]: bounds transformed bytes to what one token can
//!   carry, recording whether anything was cut.

mod codec;
pub mod binary;
pub mod error;
pub mod normalize;
pub mod text;

pub use binary::BinaryTransformer;
pub use error::TransformError;
pub use normalize::FrameNormalizer;
pub use text::TextTransformer;
