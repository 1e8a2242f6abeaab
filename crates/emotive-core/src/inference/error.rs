//! Failure signal of the inference boundary.

use std::time::Duration;
use thiserror::Error;

/// Why an inference call failed.
///
/// Callers above the inference boundary do not branch on the variant; it is
/// kept for logging and so backends can report precisely what went wrong.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// The backend could not be reached or the request could not be sent.
    #[error("{0}")]
    Transport(String),

    /// The backend answered with an error.
    #[error("{message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    /// The backend answered, but not in the requested shape.
    #[error("{0}")]
    MalformedOutput(String),

    /// No answer within the configured limit.
    #[error("inference timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Anything else, possibly without a message.
    #[error("{}", .0.as_deref().unwrap_or("An unknown error occurred"))]
    Other(Option<String>),
}

impl InferenceError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedOutput(message.into())
    }

    /// Returns the descriptive message, or `None` when the failure carries none.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Other(None) => None,
            Self::Other(Some(message))
            | Self::Transport(message)
            | Self::MalformedOutput(message)
            | Self::Upstream { message, .. }
                if message.trim().is_empty() =>
            {
                None
            }
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_extraction() {
        assert_eq!(
            InferenceError::Transport("timeout".into()).message().as_deref(),
            Some("timeout")
        );
        assert_eq!(
            InferenceError::Timeout(Duration::from_secs(30)).message().as_deref(),
            Some("inference timed out after 30s")
        );
        assert_eq!(InferenceError::Other(None).message(), None);
        assert_eq!(InferenceError::Upstream { status: Some(500), message: "  ".into() }.message(), None);
    }

    #[test]
    fn test_other_without_message_displays_fallback() {
        assert_eq!(
            InferenceError::Other(None).to_string(),
            "An unknown error occurred"
        );
    }
}
