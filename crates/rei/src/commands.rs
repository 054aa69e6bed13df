// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `rei encode|decode|stats|models` implementations.
//!
//! Every command writes one JSON document to stdout; logs go to stderr.

use std::io::Read;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rei_core::{
    ContentTag, EncodedToken, Fidelity, RawInput, ReconstructionDescriptor, ReiError,
    SecurityTier,
};
use rei_pipeline::{Compressor, Stats};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {what}: {source}")]
    Io {
        what: String,
        #[source]
        source: std::io::Error,
    },

    #[error("input is not valid UTF-8; pass --binary to encode raw bytes")]
    NotUtf8,

    #[error("invalid JSON in {what}: {source}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Rei(#[from] ReiError),
}

/// How input bytes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Text,
    Binary,
    Json,
}

/// Token plus descriptor, as written by `encode` and read by `decode`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub token: EncodedToken,
    pub descriptor: ReconstructionDescriptor,
}

/// Output of `decode`.
#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub tag: ContentTag,
    pub tier: SecurityTier,
    pub fidelity: Fidelity,
    /// `utf8` for text content, `base64` for bytes.
    pub encoding: &'static str,
    pub content: String,
}

fn source_name(path: Option<&Path>) -> String {
    match path {
        Some(p) if p != Path::new("-") => p.display().to_string(),
        _ => "stdin".to_string(),
    }
}

/// Read all of `path`, or stdin when `path` is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<Vec<u8>, CliError> {
    let what = source_name(path);
    let result = match path {
        Some(p) if p != Path::new("-") => std::fs::read(p),
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf).map(|_| buf)
        }
    };
    result.map_err(|source| CliError::Io { what, source })
}

/// Interpret raw bytes as pipeline input.
pub fn parse_input(bytes: Vec<u8>, mode: InputMode) -> Result<RawInput, CliError> {
    match mode {
        InputMode::Binary => Ok(RawInput::Bytes(bytes)),
        InputMode::Text => String::from_utf8(bytes)
            .map(RawInput::Text)
            .map_err(|_| CliError::NotUtf8),
        InputMode::Json => serde_json::from_slice(&bytes)
            .map(RawInput::Structured)
            .map_err(|source| CliError::Json {
                what: "input".to_string(),
                source,
            }),
    }
}

pub fn run_encode(compressor: &Compressor, input: &RawInput) -> Result<Envelope, CliError> {
    let (token, descriptor) = compressor.encode(input)?;
    Ok(Envelope { token, descriptor })
}

pub fn parse_envelope(bytes: &[u8]) -> Result<Envelope, CliError> {
    serde_json::from_slice(bytes).map_err(|source| CliError::Json {
        what: "envelope".to_string(),
        source,
    })
}

pub fn run_decode(compressor: &Compressor, envelope: &Envelope) -> Result<DecodeReport, CliError> {
    let decoded = compressor.decode(&envelope.token, &envelope.descriptor)?;
    let (encoding, content) = match decoded.content {
        RawInput::Text(text) => ("utf8", text),
        RawInput::Bytes(bytes) => ("base64", STANDARD.encode(bytes)),
        RawInput::Structured(value) => ("utf8", value.to_string()),
    };
    Ok(DecodeReport {
        tag: decoded.tag,
        tier: decoded.tier,
        fidelity: decoded.fidelity,
        encoding,
        content,
    })
}

pub fn run_stats(compressor: &Compressor, input: &RawInput) -> Stats {
    compressor.stats(input)
}

pub fn run_models() -> Vec<String> {
    Compressor::supported_models()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rei_pipeline::Compressor;

    use super::*;

    #[test]
    fn text_mode_rejects_invalid_utf8() {
        assert!(matches!(
            parse_input(vec![0xff, 0x00], InputMode::Text),
            Err(CliError::NotUtf8)
        ));
        assert_eq!(
            parse_input(vec![0xff], InputMode::Binary).unwrap(),
            RawInput::Bytes(vec![0xff])
        );
    }

    #[test]
    fn json_mode_parses_structured_input() {
        let input = parse_input(br#"{"a": [1]}"#.to_vec(), InputMode::Json).unwrap();
        assert_eq!(input, RawInput::from(serde_json::json!({"a": [1]})));
        assert!(parse_input(b"{nope".to_vec(), InputMode::Json).is_err());
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"from a file").unwrap();
        assert_eq!(read_source(Some(file.path())).unwrap(), b"from a file");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_source(Some(Path::new("/nonexistent/rei-input.txt"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rei-input.txt"));
    }

    #[test]
    fn envelope_round_trips_through_json() {
        let compressor = Compressor::new("gpt-4").unwrap();
        let envelope = run_encode(&compressor, &RawInput::from("cli context")).unwrap();

        let json = serde_json::to_vec(&envelope).unwrap();
        let parsed = parse_envelope(&json).unwrap();
        let report = run_decode(&compressor, &parsed).unwrap();
        assert_eq!(report.encoding, "utf8");
        assert_eq!(report.content, "cli context");
        assert_eq!(report.tier, SecurityTier::Standard);
    }

    #[test]
    fn binary_content_is_reported_as_base64() {
        let compressor = Compressor::new("claude-3.5").unwrap();
        let envelope = run_encode(&compressor, &RawInput::Bytes(vec![1, 2, 3])).unwrap();
        let report = run_decode(&compressor, &envelope).unwrap();
        assert_eq!(report.encoding, "base64");
        assert_eq!(report.content, "AQID");
    }

    #[test]
    fn envelope_with_bad_token_is_rejected() {
        let json = br#"{"token": "short", "descriptor": {"model": "gpt-4", "entries": []}}"#;
        assert!(matches!(parse_envelope(json), Err(CliError::Json { .. })));
    }

    #[test]
    fn models_are_listed() {
        assert_eq!(run_models(), vec!["claude-3.5", "gpt-4"]);
    }
}
