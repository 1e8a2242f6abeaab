//! Configuration service implementation.
//!
//! Loads the application configuration from `config.toml`, writing a file
//! with default values the first time it is missing.

use crate::paths::{EmotivePaths, ServiceType};
use emotive_core::config::AppConfig;
use emotive_core::error::{EmotiveError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the application configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: EmotivePaths,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService using the platform configuration directory.
    pub fn new() -> Self {
        Self::with_base_path(None)
    }

    /// Creates a ConfigService rooted at `base_path` (used by tests).
    pub fn with_base_path(base_path: Option<&Path>) -> Self {
        Self {
            paths: EmotivePaths::new(base_path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// Load failures are logged and answered with defaults.
    pub fn get_config(&self) -> AppConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|e| {
            tracing::warn!("[ConfigService] Using default configuration: {}", e);
            AppConfig::default()
        });

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Reads config.toml, creating it with defaults when missing.
    pub fn load_config(&self) -> Result<AppConfig> {
        let config_path = self.config_path()?;

        if !config_path.exists() {
            let default_config = AppConfig::default();
            Self::write_config(&config_path, &default_config)?;
            tracing::info!("[ConfigService] Created default config at {:?}", config_path);
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    fn write_config(path: &Path, config: &AppConfig) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(config)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn config_path(&self) -> Result<PathBuf> {
        self.paths
            .get_path(ServiceType::Config)
            .map_err(|e| EmotiveError::config(e.to_string()))
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_base_path(Some(temp_dir.path()));

        let config = service.load_config().unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(temp_dir.path().join("config.toml").exists());
    }

    #[test]
    fn test_existing_file_is_read() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "[history]\ncapacity = 3\n",
        )
        .unwrap();
        let service = ConfigService::with_base_path(Some(temp_dir.path()));

        assert_eq!(service.get_config().history.capacity, 3);
    }

    #[test]
    fn test_cache_until_invalidated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[history]\ncapacity = 3\n").unwrap();
        let service = ConfigService::with_base_path(Some(temp_dir.path()));
        assert_eq!(service.get_config().history.capacity, 3);

        std::fs::write(&path, "[history]\ncapacity = 7\n").unwrap();
        assert_eq!(service.get_config().history.capacity, 3);

        service.invalidate_cache();
        assert_eq!(service.get_config().history.capacity, 7);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "[history\n").unwrap();
        let service = ConfigService::with_base_path(Some(temp_dir.path()));

        assert!(service.load_config().unwrap_err().is_parse());
        assert_eq!(service.get_config(), AppConfig::default());
    }
}
