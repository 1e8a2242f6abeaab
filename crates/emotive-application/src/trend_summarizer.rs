//! Trend Summarizer
//!
//! Turns an ordered series of `(emotion, timestamp)` observations into a
//! free-text trend description via the inference capability.

use crate::inference_call::with_timeout;
use emotive_core::analysis::{AnalysisError, Operation, TrendObservation, TrendResult, TrendSummary};
use emotive_core::clock::{Clock, MonotonicClock};
use emotive_core::inference::{InferenceCapability, TrendSummaryRequest};
use std::sync::Arc;
use std::time::Duration;

/// Summary returned without an inference call when there is nothing to summarize.
pub const EMPTY_TREND_SUMMARY: &str = "No emotional data has been recorded yet.";

pub struct TrendSummarizer {
    inference: Arc<dyn InferenceCapability>,
    clock: Arc<dyn Clock>,
    timeout: Option<Duration>,
}

impl TrendSummarizer {
    pub fn new(inference: Arc<dyn InferenceCapability>) -> Self {
        Self {
            inference,
            clock: Arc::new(MonotonicClock::new()),
            timeout: None,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Summarizes `observations`, which are forwarded in the given order.
    ///
    /// An empty series is not an error: it yields [`EMPTY_TREND_SUMMARY`]
    /// without contacting the inference capability.
    pub async fn summarize(&self, observations: &[TrendObservation]) -> TrendResult {
        if observations.is_empty() {
            tracing::debug!("[TrendSummarizer] No observations, returning trivial summary");
            return Ok(TrendSummary {
                summary: EMPTY_TREND_SUMMARY.to_string(),
                observation_count: 0,
                timestamp: self.clock.now(),
            });
        }

        tracing::info!(
            "[TrendSummarizer] Summarizing {} observations",
            observations.len()
        );

        let request = TrendSummaryRequest::new(
            observations
                .iter()
                .map(TrendObservation::to_point)
                .collect(),
        );

        match with_timeout(self.timeout, self.inference.summarize_trend(&request)).await {
            Ok(response) => Ok(TrendSummary {
                summary: response.summary,
                observation_count: observations.len(),
                timestamp: self.clock.now(),
            }),
            Err(e) => {
                tracing::warn!("[TrendSummarizer] Summarization failed: {}", e);
                Err(AnalysisError::from_inference(
                    Operation::Summarize,
                    &e,
                    self.clock.now(),
                ))
            }
        }
    }
}
