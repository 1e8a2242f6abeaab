//! Unified path management for emotive configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/emotive/           # Config directory (platform specific)
//! ├── config.toml              # Application configuration
//! └── secret.json              # API keys
//! ```
//!
//! Every service accepts an explicit base directory so tests never touch the
//! real configuration.

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "emotive";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home/config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find configuration directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Files managed by the infrastructure layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Config,
    Secret,
}

impl ServiceType {
    fn file_name(&self) -> &'static str {
        match self {
            ServiceType::Config => "config.toml",
            ServiceType::Secret => "secret.json",
        }
    }
}

/// Resolves emotive file locations, optionally under a custom base directory.
#[derive(Debug, Clone, Default)]
pub struct EmotivePaths {
    base_path: Option<PathBuf>,
}

impl EmotivePaths {
    pub fn new(base_path: Option<&Path>) -> Self {
        Self {
            base_path: base_path.map(Path::to_path_buf),
        }
    }

    /// Returns the configuration directory (e.g., `~/.config/emotive/`).
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_path {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    /// Returns the file path for the given service.
    pub fn get_path(&self, service: ServiceType) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(service.file_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_is_used_verbatim() {
        let paths = EmotivePaths::new(Some(Path::new("/tmp/emotive-test")));
        assert_eq!(
            paths.get_path(ServiceType::Config).unwrap(),
            PathBuf::from("/tmp/emotive-test/config.toml")
        );
        assert_eq!(
            paths.get_path(ServiceType::Secret).unwrap(),
            PathBuf::from("/tmp/emotive-test/secret.json")
        );
    }

    #[test]
    fn test_default_config_dir_ends_with_app_name() {
        if let Ok(dir) = EmotivePaths::default().config_dir() {
            assert!(dir.ends_with("emotive"));
        }
    }
}
