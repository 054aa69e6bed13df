// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Orchestrator behavior with injected collaborators: custom capability
//! providers, construction limits, and per-stage error wrapping.

use std::error::Error as _;

use rei_core::{
    BoxError, CapabilityProvider, Cipher, ContentTag, ContentTransform, DerivedKey,
    DescriptorGenerator, EncodedToken, KeyDeriver, ModelCapabilities, NormalizedFrame,
    PipelineConfig, RawInput, ReconstructionDescriptor, ReiError, SecurityTier, SizeNormalizer,
    Stage, TokenFormatter, TokenMetadata, ToolDialect, CompressionHint,
};
use rei_crypto::{Argon2KeyDeriver, KdfCost};
use rei_pipeline::{Compressor, CompressorBuilder};
use rei_transform::{FrameNormalizer, TextTransformer};

fn cheap_kdf() -> Box<dyn KeyDeriver> {
    Box::new(Argon2KeyDeriver::with_uniform_cost(KdfCost {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    }))
}

fn builder(model: &str) -> CompressorBuilder {
    Compressor::builder(model).key_deriver(cheap_kdf())
}

/// Provider that knows exactly one model.
struct SingleModel {
    id: &'static str,
    dialect: ToolDialect,
}

impl CapabilityProvider for SingleModel {
    fn capabilities(&self, model_id: &str) -> Option<ModelCapabilities> {
        (model_id == self.id).then(|| ModelCapabilities {
            token_efficiency: Some(0.75),
            function_calling: true,
            dialect: self.dialect,
            ..ModelCapabilities::default()
        })
    }

    fn supported_models(&self) -> Vec<String> {
        vec![self.id.to_string()]
    }
}

#[test]
fn custom_provider_model_encodes_and_decodes() {
    let provider = SingleModel {
        id: "mistral-large",
        dialect: ToolDialect::default(),
    };
    let c = builder("mistral-large")
        .provider(Box::new(provider))
        .build()
        .unwrap();

    let (token, descriptor) = c.encode(&RawInput::from("hi")).unwrap();
    assert_eq!(descriptor.model, "mistral-large");
    assert_eq!(descriptor.entries[0].schema["type"], "function");

    let decoded = c.decode(&token, &descriptor).unwrap();
    assert_eq!(decoded.content, RawInput::from("hi"));
    assert_eq!(decoded.tier, SecurityTier::Standard);
}

#[test]
fn custom_provider_dialect_shapes_the_descriptor() {
    let provider = SingleModel {
        id: "claude-next",
        dialect: ToolDialect::AnthropicTools,
    };
    let c = Compressor::with_provider("claude-next", Box::new(provider)).unwrap();
    assert_eq!(c.config().tool_dialect, ToolDialect::AnthropicTools);

    let c = builder("claude-next")
        .provider(Box::new(SingleModel {
            id: "claude-next",
            dialect: ToolDialect::AnthropicTools,
        }))
        .build()
        .unwrap();
    let (_, descriptor) = c.encode(&RawInput::from("hi")).unwrap();
    assert!(descriptor.entries[0].schema["input_schema"].is_object());
}

#[test]
fn custom_provider_still_rejects_unknown_models_at_construction() {
    let provider = SingleModel {
        id: "mistral-large",
        dialect: ToolDialect::default(),
    };
    let err = Compressor::with_provider("gpt-4", Box::new(provider)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported model `gpt-4`; supported models: mistral-large"
    );
}

#[test]
fn normalization_target_below_minimum_fails_construction() {
    // claude-3.5 scales the base by 0.85: 9 -> 7, 10 -> 8.
    let err = builder("claude-3.5").normalization_base(9).build().unwrap_err();
    assert!(matches!(err, ReiError::Config(ref message) if message.contains("normalization")));
    assert!(matches!(
        builder("claude-3.5").normalization_base(5).build(),
        Err(ReiError::Config(_))
    ));

    let c = builder("claude-3.5").normalization_base(10).build().unwrap();
    let (token, descriptor) = c.encode(&RawInput::from("hi")).unwrap();
    assert_eq!(
        c.decode(&token, &descriptor).unwrap().content,
        RawInput::from("hi")
    );
}

fn refused(what: &str) -> BoxError {
    std::io::Error::other(format!("{what} refused")).into()
}

/// Collaborator that fails every call.
struct Refuse;

impl ContentTransform for Refuse {
    fn transform(&self, _: &[u8], _: ContentTag, _: &CompressionHint) -> Result<Vec<u8>, BoxError> {
        Err(refused("transform"))
    }

    fn inverse_transform(&self, _: &[u8], _: ContentTag) -> Result<Vec<u8>, BoxError> {
        Err(refused("inverse transform"))
    }
}

impl SizeNormalizer for Refuse {
    fn normalize(&self, _: &[u8], _: usize) -> Result<Vec<u8>, BoxError> {
        Err(refused("normalize"))
    }

    fn denormalize(&self, _: &[u8]) -> Result<NormalizedFrame, BoxError> {
        Err(refused("denormalize"))
    }
}

impl KeyDeriver for Refuse {
    fn derive_key(&self, _: &str, _: SecurityTier) -> Result<DerivedKey, BoxError> {
        Err(refused("derive key"))
    }
}

impl Cipher for Refuse {
    fn encrypt(&self, _: &[u8], _: &DerivedKey) -> Result<Vec<u8>, BoxError> {
        Err(refused("encrypt"))
    }

    fn decrypt(&self, _: &[u8], _: &DerivedKey) -> Result<Vec<u8>, BoxError> {
        Err(refused("decrypt"))
    }
}

impl TokenFormatter for Refuse {
    fn format(&self, _: &[u8], _: ContentTag, _: SecurityTier) -> Result<EncodedToken, BoxError> {
        Err(refused("format"))
    }

    fn extract_metadata(&self, _: &EncodedToken) -> Result<TokenMetadata, BoxError> {
        Err(refused("extract metadata"))
    }

    fn extract_payload(&self, _: &EncodedToken) -> Result<Vec<u8>, BoxError> {
        Err(refused("extract payload"))
    }
}

impl DescriptorGenerator for Refuse {
    fn generate(
        &self,
        _: &str,
        _: &DerivedKey,
        _: ContentTag,
        _: SecurityTier,
        _: &PipelineConfig,
    ) -> Result<ReconstructionDescriptor, BoxError> {
        Err(refused("describe"))
    }
}

/// Stage named by a single wrapped error, plus its original cause's message.
fn failed_stage(err: ReiError) -> (Stage, String) {
    let ReiError::Compression(err) = err else {
        panic!("expected a compression error, got {err}");
    };
    let stage = err.stage().expect("error should name a stage");
    let cause = err
        .source()
        .and_then(|source| source.downcast_ref::<std::io::Error>())
        .expect("original cause should be preserved");
    (stage, cause.to_string())
}

#[test]
fn each_encode_stage_failure_is_wrapped_once_with_its_cause() {
    let input = RawInput::from("some context");
    let cases: Vec<(CompressorBuilder, Stage, &str)> = vec![
        (builder("gpt-4").text_transform(Box::new(Refuse)), Stage::Transform, "transform refused"),
        (builder("gpt-4").normalizer(Box::new(Refuse)), Stage::Normalize, "normalize refused"),
        (builder("gpt-4").key_deriver(Box::new(Refuse)), Stage::DeriveKey, "derive key refused"),
        (builder("gpt-4").cipher(Box::new(Refuse)), Stage::Encrypt, "encrypt refused"),
        (builder("gpt-4").formatter(Box::new(Refuse)), Stage::Format, "format refused"),
        (
            builder("gpt-4").descriptor_generator(Box::new(Refuse)),
            Stage::Describe,
            "describe refused",
        ),
    ];

    for (builder, stage, cause) in cases {
        let err = builder.build().unwrap().encode(&input).unwrap_err();
        assert_eq!(err.to_string(), format!("{stage} stage failed: {cause}"));
        assert_eq!(failed_stage(err), (stage, cause.to_string()));
    }
}

#[test]
fn binary_transform_failure_names_transform_stage() {
    let c = builder("claude-3.5")
        .binary_transform(Box::new(Refuse))
        .build()
        .unwrap();
    let err = c.encode(&RawInput::from(vec![0u8, 1, 2])).unwrap_err();
    assert_eq!(failed_stage(err), (Stage::Transform, "transform refused".into()));
}

/// Text transform whose inverse always fails.
struct OneWayText;

impl ContentTransform for OneWayText {
    fn transform(
        &self,
        data: &[u8],
        tag: ContentTag,
        hints: &CompressionHint,
    ) -> Result<Vec<u8>, BoxError> {
        TextTransformer::new().transform(data, tag, hints)
    }

    fn inverse_transform(&self, _: &[u8], _: ContentTag) -> Result<Vec<u8>, BoxError> {
        Err(refused("inverse transform"))
    }
}

/// Normalizer whose inverse always fails.
struct OneWayFrame;

impl SizeNormalizer for OneWayFrame {
    fn normalize(&self, data: &[u8], target_size: usize) -> Result<Vec<u8>, BoxError> {
        FrameNormalizer::new().normalize(data, target_size)
    }

    fn denormalize(&self, _: &[u8]) -> Result<NormalizedFrame, BoxError> {
        Err(refused("denormalize"))
    }
}

#[test]
fn each_decode_stage_failure_is_wrapped_once_with_its_cause() {
    let (token, descriptor) = builder("gpt-4")
        .build()
        .unwrap()
        .encode(&RawInput::from("some context"))
        .unwrap();

    let cases: Vec<(CompressorBuilder, Stage, &str)> = vec![
        (
            builder("gpt-4").formatter(Box::new(Refuse)),
            Stage::ParseToken,
            "extract metadata refused",
        ),
        (builder("gpt-4").cipher(Box::new(Refuse)), Stage::Decrypt, "decrypt refused"),
        (
            builder("gpt-4").normalizer(Box::new(OneWayFrame)),
            Stage::Denormalize,
            "denormalize refused",
        ),
        (
            builder("gpt-4").text_transform(Box::new(OneWayText)),
            Stage::InverseTransform,
            "inverse transform refused",
        ),
    ];

    for (builder, stage, cause) in cases {
        let err = builder.build().unwrap().decode(&token, &descriptor).unwrap_err();
        assert_eq!(failed_stage(err), (stage, cause.to_string()));
    }
}

#[test]
fn validation_failures_are_not_wrapped_as_stage_errors() {
    let c = builder("gpt-4").text_transform(Box::new(Refuse)).build().unwrap();
    let err = c
        .encode(&RawInput::Structured(serde_json::Value::Null))
        .unwrap_err();
    assert!(matches!(err, ReiError::Validation(_)));
}
