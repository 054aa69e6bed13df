// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Supported model table.
//!
//! gpt-4:      function calling, no advanced reasoning -> standard tier
//! claude-3.5: function calling and advanced reasoning -> complex tier
//!
//! Lookups are exact. Unknown identifiers are unsupported rather than mapped
//! to a fallback, so construction fails loudly for typos.

use rei_core::{CapabilityProvider, ModelCapabilities, ToolDialect};
use tracing::debug;

/// Everything the pipeline needs to know about one target model.
#[derive(Debug, Clone, Copy)]
pub struct ModelProfile {
    pub id: &'static str,
    pub dialect: ToolDialect,
    pub max_complexity: f64,
    pub supports_binary: bool,
    pub token_efficiency: f64,
    pub advanced_reasoning: bool,
    pub function_calling: bool,
}

impl ModelProfile {
    pub fn capabilities(&self) -> ModelCapabilities {
        ModelCapabilities {
            max_complexity: Some(self.max_complexity),
            supports_binary: Some(self.supports_binary),
            token_efficiency: Some(self.token_efficiency),
            advanced_reasoning: self.advanced_reasoning,
            function_calling: self.function_calling,
            dialect: self.dialect,
        }
    }
}

/// Built-in profiles, sorted by identifier.
pub static SUPPORTED_MODELS: &[ModelProfile] = &[
    ModelProfile {
        id: "claude-3.5",
        dialect: ToolDialect::AnthropicTools,
        max_complexity: 1.0,
        supports_binary: true,
        token_efficiency: 0.85,
        advanced_reasoning: true,
        function_calling: true,
    },
    ModelProfile {
        id: "gpt-4",
        dialect: ToolDialect::OpenAiFunctions,
        max_complexity: 0.8,
        supports_binary: false,
        token_efficiency: 0.9,
        advanced_reasoning: false,
        function_calling: true,
    },
];

/// [`CapabilityProvider`] over a set of [`ModelProfile`]s.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    profiles: Vec<ModelProfile>,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelRegistry {
    /// Registry of the built-in models.
    pub fn new() -> Self {
        Self {
            profiles: SUPPORTED_MODELS.to_vec(),
        }
    }

    /// Registry of custom profiles, e.g. for tests. Later duplicates of an id
    /// replace earlier ones.
    pub fn from_profiles(profiles: impl IntoIterator<Item = ModelProfile>) -> Self {
        let mut registry = Self {
            profiles: Vec::new(),
        };
        for profile in profiles {
            registry.profiles.retain(|p| p.id != profile.id);
            registry.profiles.push(profile);
        }
        registry.profiles.sort_by_key(|p| p.id);
        registry
    }

    pub fn profile(&self, model_id: &str) -> Option<&ModelProfile> {
        self.profiles.iter().find(|p| p.id == model_id)
    }
}

impl CapabilityProvider for ModelRegistry {
    fn capabilities(&self, model_id: &str) -> Option<ModelCapabilities> {
        let found = self.profile(model_id).map(ModelProfile::capabilities);
        debug!(model = model_id, found = found.is_some(), "capability lookup");
        found
    }

    fn supported_models(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.id.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_models_are_supported() {
        let registry = ModelRegistry::new();
        assert_eq!(registry.supported_models(), vec!["claude-3.5", "gpt-4"]);
    }

    #[test]
    fn claude_has_advanced_reasoning() {
        let caps = ModelRegistry::new().capabilities("claude-3.5").unwrap();
        assert!(caps.advanced_reasoning);
        assert!(caps.function_calling);
    }

    #[test]
    fn gpt4_calls_functions_without_advanced_reasoning() {
        let caps = ModelRegistry::new().capabilities("gpt-4").unwrap();
        assert!(!caps.advanced_reasoning);
        assert!(caps.function_calling);
        assert_eq!(caps.token_efficiency, Some(0.9));
    }

    #[test]
    fn lookup_is_exact() {
        let registry = ModelRegistry::new();
        assert!(registry.capabilities("GPT-4").is_none());
        assert!(registry.capabilities("gpt-4-turbo").is_none());
        assert!(registry.capabilities("").is_none());
    }

    #[test]
    fn capability_records_carry_the_dialect() {
        let registry = ModelRegistry::new();
        let dialect = |id: &str| registry.capabilities(id).map(|caps| caps.dialect);
        assert_eq!(dialect("gpt-4"), Some(ToolDialect::OpenAiFunctions));
        assert_eq!(dialect("claude-3.5"), Some(ToolDialect::AnthropicTools));
        assert_eq!(dialect("llama"), None);
    }

    #[test]
    fn static_table_is_sorted() {
        let ids: Vec<&str> = SUPPORTED_MODELS.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn custom_profiles_replace_duplicates_and_sort() {
        let mut gpt = SUPPORTED_MODELS[1];
        gpt.token_efficiency = 0.5;
        let registry = ModelRegistry::from_profiles([SUPPORTED_MODELS[1], SUPPORTED_MODELS[0], gpt]);
        assert_eq!(registry.supported_models(), vec!["claude-3.5", "gpt-4"]);
        assert_eq!(
            registry.capabilities("gpt-4").unwrap().token_efficiency,
            Some(0.5)
        );
    }
}
