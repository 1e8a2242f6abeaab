//! Request and response shapes exchanged with an inference backend.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request for an emotional tone analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneAnalysisRequest {
    /// The raw text, exactly as submitted.
    pub text: String,
}

impl ToneAnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Structured output expected from a tone analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneAnalysisResponse {
    pub dominant_emotion: String,
    pub emotion_intensity: f64,
    pub emotional_breakdown: BTreeMap<String, f64>,
}

/// One `(emotion, timestamp)` data point sent for trend summarization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub emotion: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
}

/// Request for a trend summary. Serializes as a bare array, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrendSummaryRequest {
    pub points: Vec<TrendPoint>,
}

impl TrendSummaryRequest {
    pub fn new(points: Vec<TrendPoint>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Structured output expected from a trend summarization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSummaryResponse {
    pub summary: String,
}
