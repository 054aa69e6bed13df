// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared by every pipeline stage.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString};
use zeroize::Zeroizing;

use crate::error::CompressionError;
use crate::TOKEN_WIDTH;

/// Input accepted by the encode path.
///
/// The orchestrator borrows the input for the duration of one call and never
/// retains it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// A text sequence.
    Text(String),
    /// A byte sequence.
    Bytes(Vec<u8>),
    /// A structured value (mapping, list, or scalar). `Value::Null` is the
    /// absent input.
    Structured(serde_json::Value),
}

impl RawInput {
    /// True when the input is null.
    pub fn is_absent(&self) -> bool {
        matches!(self, RawInput::Structured(serde_json::Value::Null))
    }

    /// Measurable size of the input, if it has one.
    ///
    /// Text counts characters, bytes count bytes, mappings and lists count
    /// their top-level entries. Scalars have no measurable size.
    pub fn size(&self) -> Option<usize> {
        match self {
            RawInput::Text(text) => Some(text.chars().count()),
            RawInput::Bytes(bytes) => Some(bytes.len()),
            RawInput::Structured(serde_json::Value::Object(map)) => Some(map.len()),
            RawInput::Structured(serde_json::Value::Array(items)) => Some(items.len()),
            RawInput::Structured(_) => None,
        }
    }
}

impl From<String> for RawInput {
    fn from(text: String) -> Self {
        RawInput::Text(text)
    }
}

impl From<&str> for RawInput {
    fn from(text: &str) -> Self {
        RawInput::Text(text.to_string())
    }
}

impl From<Vec<u8>> for RawInput {
    fn from(bytes: Vec<u8>) -> Self {
        RawInput::Bytes(bytes)
    }
}

impl From<serde_json::Value> for RawInput {
    fn from(value: serde_json::Value) -> Self {
        RawInput::Structured(value)
    }
}

/// Content-type label assigned by the classifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum ContentTag {
    #[strum(serialize = "text/json")]
    #[serde(rename = "text/json")]
    Json,
    #[strum(serialize = "text/xml")]
    #[serde(rename = "text/xml")]
    Xml,
    #[strum(serialize = "text/csv")]
    #[serde(rename = "text/csv")]
    Csv,
    #[strum(serialize = "text/yaml")]
    #[serde(rename = "text/yaml")]
    Yaml,
    #[strum(serialize = "text/code")]
    #[serde(rename = "text/code")]
    Code,
    #[strum(serialize = "text/markdown")]
    #[serde(rename = "text/markdown")]
    Markdown,
    #[strum(serialize = "text/plain")]
    #[serde(rename = "text/plain")]
    PlainText,
    #[strum(serialize = "image/png")]
    #[serde(rename = "image/png")]
    Png,
    #[strum(serialize = "image/jpeg")]
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[strum(serialize = "image/gif")]
    #[serde(rename = "image/gif")]
    Gif,
    #[strum(serialize = "application/zip")]
    #[serde(rename = "application/zip")]
    Zip,
    #[strum(serialize = "application/pdf")]
    #[serde(rename = "application/pdf")]
    Pdf,
    #[strum(serialize = "application/octet-stream")]
    #[serde(rename = "application/octet-stream")]
    OctetStream,
}

/// Which transform family handles a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFamily {
    Text,
    Binary,
}

impl ContentTag {
    /// The transform family this tag dispatches to.
    pub fn family(self) -> ContentFamily {
        match self {
            ContentTag::Json
            | ContentTag::Xml
            | ContentTag::Csv
            | ContentTag::Yaml
            | ContentTag::Code
            | ContentTag::Markdown
            | ContentTag::PlainText => ContentFamily::Text,
            ContentTag::Png
            | ContentTag::Jpeg
            | ContentTag::Gif
            | ContentTag::Zip
            | ContentTag::Pdf
            | ContentTag::OctetStream => ContentFamily::Binary,
        }
    }

    pub fn is_text(self) -> bool {
        self.family() == ContentFamily::Text
    }
}

/// Encryption strength level chosen from model capabilities.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SecurityTier {
    Basic,
    Standard,
    Complex,
}

/// The native tool/function declaration format a model expects.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ToolDialect {
    /// `{"type": "function", "function": {"name", "description", "parameters"}}`
    #[default]
    OpenAiFunctions,
    /// `{"name", "description", "input_schema"}`
    AnthropicTools,
}

impl ToolDialect {
    /// Key under which the JSON Schema of the arguments is placed.
    pub fn schema_key(self) -> &'static str {
        match self {
            ToolDialect::OpenAiFunctions => "parameters",
            ToolDialect::AnthropicTools => "input_schema",
        }
    }
}

/// Priority strategy a content transform should favor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Structure,
    Patterns,
    Tokens,
    Frequency,
    Generic,
}

/// Named preprocessing step a content transform may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PreprocessStep {
    Minify,
    SortKeys,
    RemoveWhitespace,
    CompressTags,
    CompressHeaders,
    NumericEncoding,
    Tokenize,
    CompressKeywords,
    LinkShortening,
    WordFrequency,
}

/// Advisory compression metadata for one content tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompressionHint {
    pub priority: Strategy,
    pub preprocessing: &'static [PreprocessStep],
    /// Expected output/input ratio, in (0, 1].
    pub expected_ratio: f64,
    pub dictionary_compression: bool,
}

impl CompressionHint {
    pub fn has_step(&self, step: PreprocessStep) -> bool {
        self.preprocessing.contains(&step)
    }
}

/// Capability record for a target model.
///
/// Missing numeric fields fall back to documented defaults when the
/// pipeline configuration is built. A record without a dialect is rendered
/// as OpenAI functions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelCapabilities {
    #[serde(default)]
    pub max_complexity: Option<f64>,
    #[serde(default)]
    pub supports_binary: Option<bool>,
    #[serde(default)]
    pub token_efficiency: Option<f64>,
    #[serde(default)]
    pub advanced_reasoning: bool,
    #[serde(default)]
    pub function_calling: bool,
    #[serde(default)]
    pub dialect: ToolDialect,
}

/// Immutable pipeline settings derived once per orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub max_complexity: f64,
    pub supports_binary: bool,
    pub token_efficiency: f64,
    pub encryption_tier: SecurityTier,
    pub tool_dialect: ToolDialect,
}

impl PipelineConfig {
    /// Size-normalization target: `floor(base * token_efficiency)`.
    pub fn normalization_target(&self, base: usize) -> usize {
        let target = (base as f64 * self.token_efficiency).floor();
        if target.is_finite() && target > 0.0 {
            target as usize
        } else {
            0
        }
    }
}

/// A fixed-width encoded token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EncodedToken(String);

impl EncodedToken {
    /// Wrap a string as a token, checking it is exactly [`TOKEN_WIDTH`]
    /// ASCII characters.
    pub fn parse(token: impl Into<String>) -> Result<Self, CompressionError> {
        let token = token.into();
        if !token.is_ascii() {
            return Err(CompressionError::InvalidToken {
                reason: "token contains non-ASCII characters".to_string(),
            });
        }
        if token.len() != TOKEN_WIDTH {
            return Err(CompressionError::InvalidToken {
                reason: format!(
                    "token must be exactly {TOKEN_WIDTH} characters, got {}",
                    token.len()
                ),
            });
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for EncodedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EncodedToken {
    type Error = CompressionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EncodedToken> for String {
    fn from(token: EncodedToken) -> Self {
        token.0
    }
}

/// Marker fields readable from a token without the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenMetadata {
    pub tag: ContentTag,
    pub tier: SecurityTier,
}

/// A 256-bit symmetric key derived from an input digest.
///
/// The key bytes are zeroed on drop. Debug output omits them.
#[derive(Clone)]
pub struct DerivedKey(Zeroizing<[u8; 32]>);

impl DerivedKey {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// Parse a key from its 64-character hex encoding.
    pub fn from_hex(encoded: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(encoded, &mut bytes)?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0.as_slice())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_slice() == other.0.as_slice()
    }
}

impl Eq for DerivedKey {}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

impl Serialize for DerivedKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DerivedKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = Zeroizing::new(String::deserialize(deserializer)?);
        DerivedKey::from_hex(&encoded).map_err(serde::de::Error::custom)
    }
}

/// One callable entry of a reconstruction descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorEntry {
    /// Tool/function name, e.g. `rei_decrypt_context`.
    pub name: String,
    pub description: String,
    /// The entry rendered in the target model's native tool-call schema.
    pub schema: serde_json::Value,
    /// Key transported by this entry, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<DerivedKey>,
}

/// The reconstruction instructions returned alongside a token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconstructionDescriptor {
    /// Model whose tool-call dialect the entries follow.
    pub model: String,
    pub entries: Vec<DescriptorEntry>,
}

impl ReconstructionDescriptor {
    /// Native tool schemas, ready to hand to the model's API.
    pub fn native_tools(&self) -> Vec<serde_json::Value> {
        self.entries.iter().map(|e| e.schema.clone()).collect()
    }
}

/// Whether normalization kept all of the transformed bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fidelity {
    Exact,
    /// Only a prefix of `original_len` transformed bytes was kept.
    Truncated { original_len: usize },
}

/// Normalized bytes recovered from a decrypted payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFrame {
    pub data: Vec<u8>,
    pub fidelity: Fidelity,
}

/// Result of the decode path.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedOutput {
    pub tag: ContentTag,
    pub tier: SecurityTier,
    /// Text for text-family tags, bytes otherwise.
    pub content: RawInput,
    pub fidelity: Fidelity,
}
