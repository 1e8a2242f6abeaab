//! Error type for configuration and secret handling.
//!
//! Analysis and summarization failures are modelled separately as
//! [`AnalysisError`](crate::analysis::AnalysisError) values. `EmotiveError`
//! only covers what happens around them while the application starts up.

use std::fmt;
use thiserror::Error;

/// File format that failed to (de)serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => f.write_str("TOML"),
            Self::Json => f.write_str("JSON"),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum EmotiveError {
    /// Reading or writing a file failed.
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to parse {format}: {message}")]
    Parse { format: FileFormat, message: String },

    /// The config location could not be resolved or the config is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// `secret.json` exists but cannot be used. Never carries the key itself.
    #[error("Secret error: {0}")]
    Secret(String),
}

impl EmotiveError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn secret(message: impl Into<String>) -> Self {
        Self::Secret(message.into())
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<std::io::Error> for EmotiveError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for EmotiveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            format: FileFormat::Json,
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for EmotiveError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse {
            format: FileFormat::Toml,
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for EmotiveError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Parse {
            format: FileFormat::Toml,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EmotiveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "config.toml");
        let err: EmotiveError = io.into();
        assert!(matches!(err, EmotiveError::Io(_)));
        assert!(err.to_string().contains("PermissionDenied"));
    }

    #[test]
    fn test_toml_error_is_parse() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("capacity = ");
        let err: EmotiveError = parsed.unwrap_err().into();
        assert!(err.is_parse());
        assert!(err.to_string().starts_with("Failed to parse TOML"));
    }

    #[test]
    fn test_json_error_is_parse() {
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: EmotiveError = parsed.unwrap_err().into();
        assert!(err.to_string().starts_with("Failed to parse JSON"));
    }
}
