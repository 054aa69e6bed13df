// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rei context compression pipeline.
//!
//! Encode runs classify, validate, transform, normalize, digest, key
//! derivation, encryption, formatting and descriptor generation, producing a
//! 128-character token and the tool entries needed to reverse it. Decode
//! reads the token header, takes the key from the descriptor's decrypt entry,
//! and runs the inverse stages.
//!
//! ```no_run
//! use rei_core::RawInput;
//! use rei_pipeline::Compressor;
//!
//! let compressor = Compressor::new("claude-3.5")?;
//! let (token, descriptor) = compressor.encode(&RawInput::from("hello world"))?;
//! let decoded = compressor.decode(&token, &descriptor)?;
//! assert_eq!(decoded.content, RawInput::from("hello world"));
//! # Ok::<(), rei_core::ReiError>(())
//! ```

pub mod api;
pub mod config;
pub mod orchestrator;
pub mod stats;

pub use api::compress_context;
pub use config::build_config;
pub use orchestrator::{Compressor, CompressorBuilder};
pub use stats::Stats;
