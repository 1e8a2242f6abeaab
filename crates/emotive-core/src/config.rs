//! Configuration model.
//!
//! `AppConfig` is read from `config.toml`; `SecretConfig` holds API keys and
//! is read from `secret.json`. Every section falls back to defaults so a
//! partial file is valid.

use crate::emotion::{
    BreakdownPolicy, DEFAULT_BREAKDOWN_TOLERANCE, IntensityPolicy, ProfileNormalizer,
};
use crate::history::DEFAULT_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_INFERENCE_TIMEOUT_SECS: u64 = 60;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub breakdown_policy: BreakdownPolicy,
    #[serde(default = "default_tolerance")]
    pub breakdown_tolerance: f64,
    #[serde(default)]
    pub intensity_policy: IntensityPolicy,
    /// `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub inference_timeout_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            breakdown_policy: BreakdownPolicy::default(),
            breakdown_tolerance: DEFAULT_BREAKDOWN_TOLERANCE,
            intensity_policy: IntensityPolicy::default(),
            inference_timeout_secs: DEFAULT_INFERENCE_TIMEOUT_SECS,
        }
    }
}

impl AnalysisConfig {
    pub fn inference_timeout(&self) -> Option<Duration> {
        (self.inference_timeout_secs > 0).then(|| Duration::from_secs(self.inference_timeout_secs))
    }

    pub fn normalizer(&self) -> ProfileNormalizer {
        ProfileNormalizer::new(
            self.breakdown_policy,
            self.breakdown_tolerance,
            self.intensity_policy,
        )
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    #[serde(default = "default_model_name")]
    pub name: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model_name(),
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_tolerance() -> f64 {
    DEFAULT_BREAKDOWN_TOLERANCE
}

fn default_timeout_secs() -> u64 {
    DEFAULT_INFERENCE_TIMEOUT_SECS
}

fn default_model_name() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

/// API keys, stored in `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Overrides `[model] name` from config.toml.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.history.capacity, 10);
        assert_eq!(
            config.analysis.inference_timeout(),
            Some(Duration::from_secs(60))
        );
    }

    #[test]
    fn test_partial_toml_overrides_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [history]
            capacity = 25

            [analysis]
            intensity_policy = "reject"
            inference_timeout_secs = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.history.capacity, 25);
        assert_eq!(config.analysis.intensity_policy, IntensityPolicy::Reject);
        assert_eq!(config.analysis.breakdown_policy, BreakdownPolicy::Renormalize);
        assert_eq!(config.analysis.inference_timeout(), None);
        assert_eq!(config.model.name, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn test_gemini_config_debug_redacts_key() {
        let config = GeminiConfig {
            api_key: "super-secret".to_string(),
            model_name: None,
        };
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
