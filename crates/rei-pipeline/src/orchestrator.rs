// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The encode/decode orchestrator.
//!
//! A [`Compressor`] is bound to one target model at construction. Its
//! [`PipelineConfig`] and collaborators are fixed from then on, so one
//! instance can serve concurrent callers without locking.

use std::time::Instant;

use rei_config::ReiConfig;
use rei_core::{
    CapabilityProvider, Cipher, CompressionError, ContentFamily, ContentTag, ContentTransform,
    DEFAULT_MAX_INPUT_SIZE, DEFAULT_NORMALIZATION_BASE, DecodedOutput, DerivedKey,
    DescriptorGenerator, EncodedToken, Fidelity, KeyDeriver, MIN_NORMALIZATION_TARGET,
    PipelineConfig, RawInput, ReconstructionDescriptor, ReiError, SizeNormalizer, Stage,
    TokenFormatter,
};
use rei_crypto::{AesGcmCipher, Argon2KeyDeriver, FixedWidthFormatter};
use rei_detect::{Validator, classify, hints_for};
use rei_models::ModelRegistry;
use rei_tools::ToolDescriptorGenerator;
use rei_transform::{BinaryTransformer, FrameNormalizer, TextTransformer};
use tracing::{debug, info};

use crate::config::build_config;
use crate::stats::Stats;

/// Substring that marks the key-carrying descriptor entry.
const DECRYPT_MARKER: &str = "decrypt";

/// Compresses arbitrary context into a fixed-width token plus a
/// reconstruction descriptor, and reverses the process.
pub struct Compressor {
    model: String,
    config: PipelineConfig,
    normalization_base: usize,
    validator: Validator,
    text: Box<dyn ContentTransform>,
    binary: Box<dyn ContentTransform>,
    normalizer: Box<dyn SizeNormalizer>,
    kdf: Box<dyn KeyDeriver>,
    cipher: Box<dyn Cipher>,
    formatter: Box<dyn TokenFormatter>,
    descriptors: Box<dyn DescriptorGenerator>,
}

impl std::fmt::Debug for Compressor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compressor")
            .field("model", &self.model)
            .field("config", &self.config)
            .field("normalization_base", &self.normalization_base)
            .field("max_input_size", &self.validator.max_size())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Compressor`]. Every collaborator has a default.
pub struct CompressorBuilder {
    model: String,
    provider: Box<dyn CapabilityProvider>,
    max_input_size: usize,
    normalization_base: usize,
    text: Option<Box<dyn ContentTransform>>,
    binary: Option<Box<dyn ContentTransform>>,
    normalizer: Option<Box<dyn SizeNormalizer>>,
    kdf: Option<Box<dyn KeyDeriver>>,
    cipher: Option<Box<dyn Cipher>>,
    formatter: Option<Box<dyn TokenFormatter>>,
    descriptors: Option<Box<dyn DescriptorGenerator>>,
}

impl CompressorBuilder {
    pub fn provider(mut self, provider: Box<dyn CapabilityProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn max_input_size(mut self, limit: usize) -> Self {
        self.max_input_size = limit;
        self
    }

    pub fn normalization_base(mut self, base: usize) -> Self {
        self.normalization_base = base;
        self
    }

    pub fn text_transform(mut self, transform: Box<dyn ContentTransform>) -> Self {
        self.text = Some(transform);
        self
    }

    pub fn binary_transform(mut self, transform: Box<dyn ContentTransform>) -> Self {
        self.binary = Some(transform);
        self
    }

    pub fn normalizer(mut self, normalizer: Box<dyn SizeNormalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn key_deriver(mut self, kdf: Box<dyn KeyDeriver>) -> Self {
        self.kdf = Some(kdf);
        self
    }

    pub fn cipher(mut self, cipher: Box<dyn Cipher>) -> Self {
        self.cipher = Some(cipher);
        self
    }

    pub fn formatter(mut self, formatter: Box<dyn TokenFormatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn descriptor_generator(mut self, generator: Box<dyn DescriptorGenerator>) -> Self {
        self.descriptors = Some(generator);
        self
    }

    /// Resolve the model's capabilities and assemble the orchestrator.
    ///
    /// Fails with [`ReiError::UnsupportedModel`] when the provider does not
    /// know the model, and with [`ReiError::Config`] when the normalization
    /// target for the model is below [`MIN_NORMALIZATION_TARGET`].
    pub fn build(self) -> Result<Compressor, ReiError> {
        let Some(capabilities) = self.provider.capabilities(&self.model) else {
            let mut supported = self.provider.supported_models();
            supported.sort();
            return Err(ReiError::UnsupportedModel {
                model: self.model,
                supported,
            });
        };

        let config = build_config(&capabilities);
        let target = config.normalization_target(self.normalization_base);
        if target < MIN_NORMALIZATION_TARGET {
            return Err(ReiError::Config(format!(
                "normalization target {target} for model `{}` is below the minimum of \
                 {MIN_NORMALIZATION_TARGET}; raise the normalization base",
                self.model
            )));
        }
        debug!(model = %self.model, ?config, target, "pipeline configured");

        Ok(Compressor {
            model: self.model,
            config,
            normalization_base: self.normalization_base,
            validator: Validator::with_limit(self.max_input_size),
            text: self.text.unwrap_or_else(|| Box::new(TextTransformer::new())),
            binary: self.binary.unwrap_or_else(|| Box::new(BinaryTransformer::new())),
            normalizer: self
                .normalizer
                .unwrap_or_else(|| Box::new(FrameNormalizer::new())),
            kdf: self.kdf.unwrap_or_else(|| Box::new(Argon2KeyDeriver::new())),
            cipher: self.cipher.unwrap_or_else(|| Box::new(AesGcmCipher::new())),
            formatter: self
                .formatter
                .unwrap_or_else(|| Box::new(FixedWidthFormatter::new())),
            descriptors: self
                .descriptors
                .unwrap_or_else(|| Box::new(ToolDescriptorGenerator::default())),
        })
    }
}

impl Compressor {
    /// Orchestrator for `model` with the built-in model table and default
    /// collaborators.
    pub fn new(model: impl Into<String>) -> Result<Self, ReiError> {
        Self::builder(model).build()
    }

    /// Orchestrator for `model` whose capabilities come from `provider`.
    pub fn with_provider(
        model: impl Into<String>,
        provider: Box<dyn CapabilityProvider>,
    ) -> Result<Self, ReiError> {
        Self::builder(model).provider(provider).build()
    }

    /// Orchestrator configured from loaded settings.
    pub fn from_config(config: &ReiConfig) -> Result<Self, ReiError> {
        Self::builder(config.model.name.clone())
            .max_input_size(config.pipeline.max_input_size)
            .normalization_base(config.pipeline.normalization_base)
            .build()
    }

    pub fn builder(model: impl Into<String>) -> CompressorBuilder {
        CompressorBuilder {
            model: model.into(),
            provider: Box::new(ModelRegistry::new()),
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            normalization_base: DEFAULT_NORMALIZATION_BASE,
            text: None,
            binary: None,
            normalizer: None,
            kdf: None,
            cipher: None,
            formatter: None,
            descriptors: None,
        }
    }

    /// Identifiers of the built-in supported models.
    pub fn supported_models() -> Vec<String> {
        ModelRegistry::new().supported_models()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn transformer(&self, tag: ContentTag) -> &dyn ContentTransform {
        match tag.family() {
            ContentFamily::Text => &*self.text,
            ContentFamily::Binary => &*self.binary,
        }
    }

    /// Encode `input` into a token and its reconstruction descriptor.
    ///
    /// Validation failures are returned as [`ReiError::Validation`]; any
    /// later failure is a single [`ReiError::Compression`] naming the stage.
    pub fn encode(
        &self,
        input: &RawInput,
    ) -> Result<(EncodedToken, ReconstructionDescriptor), ReiError> {
        let started = Instant::now();

        // 1. Classify and validate.
        let tag = classify(input);
        let validated = self.validator.validate(input, tag)?;
        let tier = self.config.encryption_tier;
        let hints = hints_for(tag);

        // 2. Content transform for the tag's family.
        let content = content_bytes(input);
        let transformed = self
            .transformer(tag)
            .transform(&content, tag, &hints)
            .map_err(CompressionError::at(Stage::Transform))?;
        debug!(%tag, from = content.len(), to = transformed.len(), "transformed");

        // 3. Bound to the token's capacity.
        let target = self.config.normalization_target(self.normalization_base);
        let frame = self
            .normalizer
            .normalize(&transformed, target)
            .map_err(CompressionError::at(Stage::Normalize))?;
        debug!(target, frame = frame.len(), "normalized");

        // 4. Key from the digest of the original input.
        let digest = rei_crypto::digest_hex(input);
        let key = self
            .kdf
            .derive_key(&digest, tier)
            .map_err(CompressionError::at(Stage::DeriveKey))?;
        debug!(%tier, "key derived");

        // 5. Seal and format.
        let sealed = self
            .cipher
            .encrypt(&frame, &key)
            .map_err(CompressionError::at(Stage::Encrypt))?;
        let token = self
            .formatter
            .format(&sealed, tag, tier)
            .map_err(CompressionError::at(Stage::Format))?;

        // 6. Descriptor in the model's dialect.
        let descriptor = self
            .descriptors
            .generate(&self.model, &key, tag, tier, &self.config)
            .map_err(CompressionError::at(Stage::Describe))?;

        info!(
            model = %self.model,
            %tag,
            %tier,
            size = ?validated.size(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "context encoded"
        );
        Ok((token, descriptor))
    }

    /// Recover the content of `token` using the key carried by `descriptor`.
    pub fn decode(
        &self,
        token: &EncodedToken,
        descriptor: &ReconstructionDescriptor,
    ) -> Result<DecodedOutput, ReiError> {
        let started = Instant::now();

        // 1. Header fields, no key needed.
        let meta = self
            .formatter
            .extract_metadata(token)
            .map_err(CompressionError::at(Stage::ParseToken))?;

        // 2. Key from the decrypt entry.
        let key = find_key(descriptor).ok_or(CompressionError::KeyNotFound)?;

        // 3. Open the payload.
        let sealed = self
            .formatter
            .extract_payload(token)
            .map_err(CompressionError::at(Stage::ParseToken))?;
        let frame = self
            .cipher
            .decrypt(&sealed, key)
            .map_err(CompressionError::at(Stage::Decrypt))?;
        let normalized = self
            .normalizer
            .denormalize(&frame)
            .map_err(CompressionError::at(Stage::Denormalize))?;

        // 4. Inverse transform for the tag's family.
        let restored = self
            .transformer(meta.tag)
            .inverse_transform(&normalized.data, meta.tag)
            .map_err(CompressionError::at(Stage::InverseTransform))?;

        let content = match (meta.tag.family(), normalized.fidelity) {
            (ContentFamily::Binary, _) => RawInput::Bytes(restored),
            (ContentFamily::Text, Fidelity::Exact) => RawInput::Text(
                String::from_utf8(restored)
                    .map_err(CompressionError::at(Stage::InverseTransform))?,
            ),
            (ContentFamily::Text, Fidelity::Truncated { .. }) => {
                RawInput::Text(String::from_utf8_lossy(&restored).into_owned())
            }
        };

        info!(
            tag = %meta.tag,
            tier = %meta.tier,
            fidelity = ?normalized.fidelity,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "context decoded"
        );
        Ok(DecodedOutput {
            tag: meta.tag,
            tier: meta.tier,
            content,
            fidelity: normalized.fidelity,
        })
    }

    /// Parse `token` and decode it.
    pub fn decode_str(
        &self,
        token: &str,
        descriptor: &ReconstructionDescriptor,
    ) -> Result<DecodedOutput, ReiError> {
        let token = EncodedToken::parse(token)?;
        self.decode(&token, descriptor)
    }

    /// Size and ratio report for `input`. Runs no pipeline stage.
    pub fn stats(&self, input: &RawInput) -> Stats {
        Stats::measure(input, &self.model, self.config.encryption_tier)
    }
}

/// The first key carried by an entry named like the decrypt tool.
fn find_key(descriptor: &ReconstructionDescriptor) -> Option<&DerivedKey> {
    descriptor
        .entries
        .iter()
        .filter(|entry| entry.name.contains(DECRYPT_MARKER))
        .find_map(|entry| entry.key.as_ref())
}

/// Bytes handed to the content transform.
///
/// Mappings and lists are serialized as canonical JSON, string values as
/// their text, and other scalars as their JSON rendering.
fn content_bytes(input: &RawInput) -> Vec<u8> {
    match input {
        RawInput::Text(text) => text.as_bytes().to_vec(),
        RawInput::Bytes(bytes) => bytes.clone(),
        RawInput::Structured(serde_json::Value::String(text)) => text.as_bytes().to_vec(),
        RawInput::Structured(value) => rei_crypto::digest::canonical_json(value).into_bytes(),
    }
}
