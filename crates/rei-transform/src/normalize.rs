// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Size normalization into a bounded frame.
//!
//! A frame is `[mode u8][original_len u32 LE][data]`. Mode 0 carries all of
//! the transformed bytes; mode 1 carries only their leading bytes. The frame
//! never exceeds the smaller of the requested target and the normalizer's
//! capacity, so a sealed frame always fits in one token.

use rei_core::{BoxError, Fidelity, NormalizedFrame, SizeNormalizer, PAYLOAD_CAPACITY};
use tracing::debug;

use crate::error::TransformError;

const MODE_EXACT: u8 = 0;
const MODE_TRUNCATED: u8 = 1;

/// Frame header length in bytes.
pub const FRAME_HEADER_LEN: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct FrameNormalizer {
    capacity: usize,
}

impl Default for FrameNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameNormalizer {
    /// Normalizer bounded by the token payload capacity.
    pub fn new() -> Self {
        Self {
            capacity: PAYLOAD_CAPACITY,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Largest number of transformed bytes an exact frame can carry for
    /// `target_size`.
    pub fn data_budget(&self, target_size: usize) -> usize {
        target_size
            .min(self.capacity)
            .saturating_sub(FRAME_HEADER_LEN)
    }

    fn frame(&self, data: &[u8], target_size: usize) -> Result<Vec<u8>, TransformError> {
        let budget = target_size.min(self.capacity);
        if budget < FRAME_HEADER_LEN {
            return Err(TransformError::BudgetTooSmall {
                budget,
                header: FRAME_HEADER_LEN,
            });
        }

        let original_len =
            u32::try_from(data.len()).map_err(|_| TransformError::Oversized(data.len()))?;
        let room = budget - FRAME_HEADER_LEN;
        let (mode, kept) = if data.len() <= room {
            (MODE_EXACT, data)
        } else {
            (MODE_TRUNCATED, &data[..room])
        };

        if mode == MODE_TRUNCATED {
            debug!(original_len, kept = kept.len(), "transformed content truncated to fit token");
        }

        let mut out = Vec::with_capacity(FRAME_HEADER_LEN + kept.len());
        out.push(mode);
        out.extend_from_slice(&original_len.to_le_bytes());
        out.extend_from_slice(kept);
        Ok(out)
    }

    fn unframe(&self, frame: &[u8]) -> Result<NormalizedFrame, TransformError> {
        if frame.len() < FRAME_HEADER_LEN {
            return Err(TransformError::TooShort {
                what: "normalized frame",
                expected: FRAME_HEADER_LEN,
                actual: frame.len(),
            });
        }

        let mut len_bytes = [0u8; 4];
        len_bytes.copy_from_slice(&frame[1..FRAME_HEADER_LEN]);
        let original_len = u32::from_le_bytes(len_bytes) as usize;
        let data = frame[FRAME_HEADER_LEN..].to_vec();

        let fidelity = match frame[0] {
            MODE_EXACT if data.len() == original_len => Fidelity::Exact,
            MODE_EXACT => {
                return Err(TransformError::LengthMismatch {
                    declared: original_len,
                    actual: data.len(),
                });
            }
            MODE_TRUNCATED => Fidelity::Truncated { original_len },
            other => {
                return Err(TransformError::UnknownMode {
                    what: "frame",
                    mode: other,
                });
            }
        };

        Ok(NormalizedFrame { data, fidelity })
    }
}

impl SizeNormalizer for FrameNormalizer {
    fn normalize(&self, data: &[u8], target_size: usize) -> Result<Vec<u8>, BoxError> {
        Ok(self.frame(data, target_size)?)
    }

    fn denormalize(&self, frame: &[u8]) -> Result<NormalizedFrame, BoxError> {
        Ok(self.unframe(frame)?)
    }
}
