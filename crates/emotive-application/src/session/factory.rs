use crate::analysis_session::AnalysisSession;
use crate::emotion_analyzer::EmotionAnalyzer;
use crate::trend_summarizer::TrendSummarizer;
use emotive_core::clock::{Clock, MonotonicClock};
use emotive_core::config::AppConfig;
use emotive_core::inference::InferenceCapability;
use std::sync::Arc;

/// Factory for creating AnalysisSession instances.
///
/// The analyzer and summarizer are stateless and shared by every session the
/// factory creates; each session gets its own history store.
pub struct SessionFactory {
    analyzer: Arc<EmotionAnalyzer>,
    summarizer: Arc<TrendSummarizer>,
    history_capacity: usize,
}

impl SessionFactory {
    /// Creates a SessionFactory.
    ///
    /// # Arguments
    ///
    /// * `analyzer` - Shared emotion analyzer
    /// * `summarizer` - Shared trend summarizer
    /// * `history_capacity` - Number of entries each session keeps
    pub fn new(
        analyzer: Arc<EmotionAnalyzer>,
        summarizer: Arc<TrendSummarizer>,
        history_capacity: usize,
    ) -> Self {
        Self {
            analyzer,
            summarizer,
            history_capacity,
        }
    }

    /// Wires analyzer and summarizer from configuration.
    ///
    /// Both share one monotonic clock so timestamps across analyses and
    /// summaries are ordered.
    pub fn from_config(config: &AppConfig, inference: Arc<dyn InferenceCapability>) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(MonotonicClock::new());
        let timeout = config.analysis.inference_timeout();

        let analyzer = EmotionAnalyzer::new(inference.clone())
            .with_normalizer(config.analysis.normalizer())
            .with_clock(clock.clone())
            .with_timeout(timeout);
        let summarizer = TrendSummarizer::new(inference)
            .with_clock(clock)
            .with_timeout(timeout);

        Self::new(
            Arc::new(analyzer),
            Arc::new(summarizer),
            config.history.capacity,
        )
    }

    /// Creates a new session with an empty history.
    pub fn create_session(&self, session_id: String) -> AnalysisSession {
        AnalysisSession::new(
            session_id,
            self.analyzer.clone(),
            self.summarizer.clone(),
            self.history_capacity,
        )
    }
}
