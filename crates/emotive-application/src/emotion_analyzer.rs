//! Emotion Analyzer
//!
//! Validates submitted text, asks the inference capability for an emotion
//! profile, enforces the output shape and stamps the result with a local
//! timestamp. Every failure comes back as an [`AnalysisError`] value.

use crate::inference_call::with_timeout;
use emotive_core::analysis::{AnalysisError, AnalysisResult, Operation};
use emotive_core::clock::{Clock, MonotonicClock};
use emotive_core::emotion::ProfileNormalizer;
use emotive_core::inference::{InferenceCapability, ToneAnalysisRequest};
use std::sync::Arc;
use std::time::Duration;

pub struct EmotionAnalyzer {
    inference: Arc<dyn InferenceCapability>,
    normalizer: ProfileNormalizer,
    clock: Arc<dyn Clock>,
    timeout: Option<Duration>,
}

impl EmotionAnalyzer {
    /// Creates an analyzer with default normalization, a monotonic clock and
    /// no timeout.
    pub fn new(inference: Arc<dyn InferenceCapability>) -> Self {
        Self {
            inference,
            normalizer: ProfileNormalizer::default(),
            clock: Arc::new(MonotonicClock::new()),
            timeout: None,
        }
    }

    pub fn with_normalizer(mut self, normalizer: ProfileNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Analyzes the emotional tone of `text`.
    ///
    /// Blank text is rejected before any inference call. No retry is
    /// attempted on failure.
    ///
    /// # Returns
    ///
    /// * `Ok(EmotionProfile)` - Profile stamped with the completion time
    /// * `Err(AnalysisError)` - Validation or inference failure
    pub async fn analyze(&self, text: &str) -> AnalysisResult {
        if text.trim().is_empty() {
            tracing::debug!("[EmotionAnalyzer] Rejected empty input");
            return Err(AnalysisError::empty_input(self.clock.now()));
        }

        tracing::info!("[EmotionAnalyzer] Analyzing text ({} chars)", text.chars().count());

        let request = ToneAnalysisRequest::new(text);
        let outcome = with_timeout(self.timeout, self.inference.analyze_tone(&request))
            .await
            .and_then(|response| self.normalizer.normalize(response, self.clock.now()));

        match outcome {
            Ok(profile) => {
                tracing::info!(
                    "[EmotionAnalyzer] Detected {} (intensity {:.2})",
                    profile.dominant_emotion(),
                    profile.emotion_intensity()
                );
                Ok(profile)
            }
            Err(e) => {
                tracing::warn!("[EmotionAnalyzer] Analysis failed: {}", e);
                Err(AnalysisError::from_inference(
                    Operation::Analyze,
                    &e,
                    self.clock.now(),
                ))
            }
        }
    }
}
