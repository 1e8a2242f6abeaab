//! Classified failure of one analysis or summarization attempt.

use crate::inference::InferenceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned when the submitted text is empty after trimming.
pub const EMPTY_INPUT_MESSAGE: &str = "Text input cannot be empty.";

/// Fallback used when a failure carries no extractable message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Which operation failed, used to phrase the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Analyze,
    Summarize,
}

impl Operation {
    fn failure_prefix(&self) -> &'static str {
        match self {
            Self::Analyze => "Failed to analyze emotion",
            Self::Summarize => "Failed to summarize emotional trend",
        }
    }
}

/// Failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisErrorKind {
    /// Rejected locally before any inference call.
    Validation,
    /// The inference capability failed or returned non-conforming output.
    Inference,
    /// The failure carried no usable message.
    Unknown,
}

/// Result of one failed attempt. Never stored in history.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct AnalysisError {
    kind: AnalysisErrorKind,
    message: String,
    timestamp: DateTime<Utc>,
}

impl AnalysisError {
    /// Empty-input rejection.
    pub fn empty_input(timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: AnalysisErrorKind::Validation,
            message: EMPTY_INPUT_MESSAGE.to_string(),
            timestamp,
        }
    }

    /// Wraps an inference failure as `"<prefix>: <message>. Please try again."`.
    pub fn from_inference(
        operation: Operation,
        error: &InferenceError,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let detail = error.message().and_then(|message| {
            let message = message.strip_suffix('.').unwrap_or(&message).trim();
            (!message.is_empty()).then(|| message.to_string())
        });
        let (kind, detail) = match detail {
            Some(detail) => (AnalysisErrorKind::Inference, detail),
            None => (AnalysisErrorKind::Unknown, UNKNOWN_ERROR_MESSAGE.to_string()),
        };

        Self {
            kind,
            message: format!(
                "{}: {}. Please try again.",
                operation.failure_prefix(),
                detail
            ),
            timestamp,
        }
    }

    pub fn kind(&self) -> AnalysisErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_validation(&self) -> bool {
        self.kind == AnalysisErrorKind::Validation
    }
}
