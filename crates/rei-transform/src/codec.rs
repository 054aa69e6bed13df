// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mode-prefixed DEFLATE packing shared by the text and binary transforms.
//!
//! Layout: `[mode u8][body]`, mode 0 = stored, mode 1 = raw DEFLATE.

use std::io::{Read, Write};

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::error::TransformError;

const MODE_STORED: u8 = 0;
const MODE_DEFLATE: u8 = 1;

/// Store `data` verbatim.
pub(crate) fn store(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + 1);
    out.push(MODE_STORED);
    out.extend_from_slice(data);
    out
}

/// DEFLATE `data` at `level`, falling back to storage when that is not smaller.
pub(crate) fn pack(data: &[u8], level: Compression) -> Result<Vec<u8>, TransformError> {
    let mut encoder = DeflateEncoder::new(vec![MODE_DEFLATE], level);
    encoder.write_all(data)?;
    let deflated = encoder.finish()?;

    if deflated.len() < data.len() + 1 {
        Ok(deflated)
    } else {
        Ok(store(data))
    }
}

/// Reverse [`pack`] or [`store`].
///
/// A DEFLATE body cut short by normalization yields whatever prefix decodes,
/// which may be empty.
pub(crate) fn unpack(packed: &[u8]) -> Result<Vec<u8>, TransformError> {
    let Some((&mode, body)) = packed.split_first() else {
        // A fully truncated frame carries nothing to unpack.
        return Ok(Vec::new());
    };

    match mode {
        MODE_STORED => Ok(body.to_vec()),
        MODE_DEFLATE => {
            let mut decoder = DeflateDecoder::new(body);
            let mut out = Vec::new();
            match decoder.read_to_end(&mut out) {
                Ok(_) => Ok(out),
                Err(e) => {
                    tracing::debug!(error = %e, recovered = out.len(), "partial deflate stream");
                    Ok(out)
                }
            }
        }
        other => Err(TransformError::UnknownMode {
            what: "codec",
            mode: other,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repetitive_data_is_deflated() {
        let data = b"abcabcabcabcabcabcabcabcabcabcabcabc";
        let packed = pack(data, Compression::best()).unwrap();
        assert_eq!(packed[0], MODE_DEFLATE);
        assert!(packed.len() < data.len());
        assert_eq!(unpack(&packed).unwrap(), data);
    }

    #[test]
    fn incompressible_data_is_stored() {
        let data = [0x13u8];
        let packed = pack(&data, Compression::best()).unwrap();
        assert_eq!(packed, vec![MODE_STORED, 0x13]);
        assert_eq!(unpack(&packed).unwrap(), data);
    }

    #[test]
    fn truncated_deflate_yields_a_prefix() {
        let data = "the quick brown fox jumps over the lazy dog. ".repeat(50);
        let packed = pack(data.as_bytes(), Compression::fast()).unwrap();
        let cut = &packed[..packed.len() / 2];

        let recovered = unpack(cut).unwrap();
        assert!(data.as_bytes().starts_with(&recovered));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(matches!(
            unpack(&[9, 1, 2]),
            Err(TransformError::UnknownMode { mode: 9, .. })
        ));
    }

    #[test]
    fn empty_input_unpacks_to_nothing() {
        assert!(unpack(&[]).unwrap().is_empty());
    }
}
