//! Trend observation and summary models.

use crate::inference::TrendPoint;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// `(emotion, timestamp)` pair projected from one history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendObservation {
    pub emotion: String,
    pub timestamp: DateTime<Utc>,
}

impl TrendObservation {
    pub fn new(emotion: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            emotion: emotion.into(),
            timestamp,
        }
    }

    /// Wire form with an RFC 3339 timestamp (millisecond precision, `Z` suffix).
    pub fn to_point(&self) -> TrendPoint {
        TrendPoint {
            emotion: self.emotion.clone(),
            timestamp: self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Free-text description of how emotional state changed across observations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub summary: String,
    /// Number of observations the summary covers.
    pub observation_count: usize,
    pub timestamp: DateTime<Utc>,
}
