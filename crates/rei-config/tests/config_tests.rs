// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Rei configuration system.

use rei_config::diagnostic::ConfigError;
use rei_config::model::ReiConfig;
use rei_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};
use serial_test::serial;

/// A fully specified TOML file deserializes field by field.
#[test]
fn valid_toml_deserializes_into_rei_config() {
    let toml = r#"
[model]
name = "gpt-4"

[pipeline]
max_input_size = 1000
normalization_base = 256

[logging]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.model.name, "gpt-4");
    assert_eq!(config.pipeline.max_input_size, 1000);
    assert_eq!(config.pipeline.normalization_base, 256);
    assert_eq!(config.logging.level, "debug");
}

/// An empty document yields the compiled defaults.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_and_validate_str("").expect("defaults should validate");
    let defaults = ReiConfig::default();
    assert_eq!(config.model.name, defaults.model.name);
    assert_eq!(config.pipeline.max_input_size, 500_000_000);
    assert_eq!(config.pipeline.normalization_base, 512);
    assert_eq!(config.logging.level, "info");
}

/// Unknown keys are rejected with a suggestion.
#[test]
fn unknown_key_produces_suggestion() {
    let toml = r#"
[model]
naem = "gpt-4"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown key");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "naem");
            assert_eq!(suggestion.as_deref(), Some("name"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// Unknown top-level sections are rejected too.
#[test]
fn unknown_section_is_rejected() {
    let errors = load_and_validate_str("[cipher]\nmode = \"ecb\"\n").expect_err("should fail");
    assert!(matches!(errors[0], ConfigError::UnknownKey { .. }));
}

/// A string where an integer belongs is an InvalidType error.
#[test]
fn wrong_type_is_reported() {
    let errors = load_and_validate_str("[pipeline]\nmax_input_size = \"big\"\n")
        .expect_err("should fail");
    match &errors[0] {
        ConfigError::InvalidType { key, .. } => assert!(key.contains("max_input_size")),
        other => panic!("expected InvalidType, got {other:?}"),
    }
}

/// Semantic validation runs after deserialization.
#[test]
fn zero_ceiling_fails_validation() {
    let errors =
        load_and_validate_str("[pipeline]\nmax_input_size = 0\n").expect_err("should fail");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("max_input_size")
    )));
}

/// Explicit file paths load, and `REI_*` variables override them.
#[test]
#[serial]
fn file_then_env_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rei.toml");
    std::fs::write(&path, "[model]\nname = \"gpt-4\"\n").unwrap();

    let config = load_and_validate_path(&path).expect("file should load");
    assert_eq!(config.model.name, "gpt-4");

    // SAFETY: serialized test; no other thread reads the environment.
    unsafe { std::env::set_var("REI_MODEL_NAME", "claude-3.5") };
    let config = load_and_validate_path(&path);
    unsafe { std::env::remove_var("REI_MODEL_NAME") };

    assert_eq!(config.expect("should load").model.name, "claude-3.5");
}

/// A normalization base too small to hold a frame is rejected at load time.
#[test]
fn tiny_normalization_base_fails_validation() {
    let errors = load_and_validate_str("[pipeline]\nnormalization_base = 5\n")
        .expect_err("base of 5 should be rejected");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("normalization_base")
    )));
    assert!(load_and_validate_str("[pipeline]\nnormalization_base = 16\n").is_ok());
}
