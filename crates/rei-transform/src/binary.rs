// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binary-family transform.

use flate2::Compression;
use rei_core::{BoxError, CompressionHint, ContentTag, ContentTransform};

use crate::codec;

/// Stores formats that already carry their own compression and DEFLATEs
/// everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryTransformer;

impl BinaryTransformer {
    pub fn new() -> Self {
        Self
    }

    /// Formats whose payload is already entropy-coded.
    pub fn is_precompressed(tag: ContentTag) -> bool {
        matches!(
            tag,
            ContentTag::Png | ContentTag::Jpeg | ContentTag::Gif | ContentTag::Zip
        )
    }
}

impl ContentTransform for BinaryTransformer {
    fn transform(
        &self,
        data: &[u8],
        tag: ContentTag,
        _hints: &CompressionHint,
    ) -> Result<Vec<u8>, BoxError> {
        if Self::is_precompressed(tag) {
            return Ok(codec::store(data));
        }
        Ok(codec::pack(data, Compression::best())?)
    }

    fn inverse_transform(&self, data: &[u8], _tag: ContentTag) -> Result<Vec<u8>, BoxError> {
        Ok(codec::unpack(data)?)
    }
}

#[cfg(test)]
mod tests {
    use rei_detect::hints_for;

    use super::*;

    #[test]
    fn png_is_stored_verbatim() {
        let data = b"\x89PNG\r\n\x1a\n\0\0\0\0\0\0\0\0\0\0\0\0";
        let t = BinaryTransformer::new();
        let packed = t
            .transform(data, ContentTag::Png, &hints_for(ContentTag::Png))
            .unwrap();
        assert_eq!(packed.len(), data.len() + 1);
        assert_eq!(t.inverse_transform(&packed, ContentTag::Png).unwrap(), data);
    }

    #[test]
    fn octet_stream_is_deflated() {
        let data = vec![0u8; 4096];
        let t = BinaryTransformer::new();
        let tag = ContentTag::OctetStream;
        let packed = t.transform(&data, tag, &hints_for(tag)).unwrap();
        assert!(packed.len() < 64);
        assert_eq!(t.inverse_transform(&packed, tag).unwrap(), data);
    }
}
