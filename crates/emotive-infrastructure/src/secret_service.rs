//! Secret service implementation.
//!
//! Reads API keys from `secret.json`. The `GEMINI_API_KEY` environment
//! variable takes precedence over the file.

use crate::paths::{EmotivePaths, ServiceType};
use emotive_core::config::{GeminiConfig, SecretConfig};
use emotive_core::error::{EmotiveError, Result};
use emotive_core::secret::SecretService;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Service for managing secret configuration.
///
/// The loaded configuration is cached after the first successful read.
pub struct SecretServiceImpl {
    paths: EmotivePaths,
    env_key: Option<String>,
    secrets: RwLock<Option<SecretConfig>>,
}

impl SecretServiceImpl {
    /// Uses the platform config directory and the process environment.
    pub fn new() -> Self {
        Self::with_base_path(None, std::env::var(GEMINI_API_KEY_ENV).ok())
    }

    /// Uses `base_path` for `secret.json` and an explicit environment override.
    pub fn with_base_path(base_path: Option<&Path>, env_key: Option<String>) -> Self {
        Self {
            paths: EmotivePaths::new(base_path),
            env_key: env_key.filter(|key| !key.trim().is_empty()),
            secrets: RwLock::new(None),
        }
    }

    fn secret_path(&self) -> Result<PathBuf> {
        self.paths
            .get_path(ServiceType::Secret)
            .map_err(|e| EmotiveError::config(e.to_string()))
    }

    async fn read_file(&self) -> Result<SecretConfig> {
        let path = self.secret_path()?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                // serde_json errors only carry positions, never the key itself
                EmotiveError::secret(format!("Failed to parse {}: {}", path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SecretConfig::default()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for SecretServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig> {
        {
            let cached = self.secrets.read().await;
            if let Some(ref config) = *cached {
                return Ok(config.clone());
            }
        }

        let mut loaded = self.read_file().await?;
        if let Some(ref key) = self.env_key {
            let model_name = loaded.gemini.as_ref().and_then(|g| g.model_name.clone());
            loaded.gemini = Some(GeminiConfig {
                api_key: key.clone(),
                model_name,
            });
        }

        *self.secrets.write().await = Some(loaded.clone());
        Ok(loaded)
    }

    async fn secret_file_exists(&self) -> bool {
        self.secret_path().map(|path| path.exists()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_yields_empty_config() {
        let temp_dir = TempDir::new().unwrap();
        let service = SecretServiceImpl::with_base_path(Some(temp_dir.path()), None);

        assert!(!service.secret_file_exists().await);
        assert_eq!(service.load_secrets().await.unwrap(), SecretConfig::default());
    }

    #[tokio::test]
    async fn test_reads_gemini_key_from_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("secret.json"),
            r#"{"gemini": {"api_key": "file-key", "model_name": "gemini-2.0-flash"}}"#,
        )
        .unwrap();
        let service = SecretServiceImpl::with_base_path(Some(temp_dir.path()), None);

        let gemini = service.load_secrets().await.unwrap().gemini.unwrap();

        assert_eq!(gemini.api_key, "file-key");
        assert_eq!(gemini.model_name.as_deref(), Some("gemini-2.0-flash"));
    }

    #[tokio::test]
    async fn test_env_key_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("secret.json"),
            r#"{"gemini": {"api_key": "file-key", "model_name": "gemini-2.0-flash"}}"#,
        )
        .unwrap();
        let service =
            SecretServiceImpl::with_base_path(Some(temp_dir.path()), Some("env-key".to_string()));

        let gemini = service.load_secrets().await.unwrap().gemini.unwrap();

        assert_eq!(gemini.api_key, "env-key");
        assert_eq!(gemini.model_name.as_deref(), Some("gemini-2.0-flash"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_secret_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("secret.json"), "{not json").unwrap();
        let service = SecretServiceImpl::with_base_path(Some(temp_dir.path()), None);

        let err = service.load_secrets().await.unwrap_err();
        assert!(matches!(err, EmotiveError::Secret(_)));
    }
}
