//! Analysis session: the single entry point used by front ends.
//!
//! A session owns its [`HistoryStore`]. Successful analyses are appended to
//! it; failed ones leave it untouched. Nothing in this module is global, so
//! any number of sessions can coexist without sharing history.

use crate::emotion_analyzer::EmotionAnalyzer;
use crate::trend_summarizer::TrendSummarizer;
use emotive_core::analysis::{AnalysisResult, TrendObservation, TrendResult};
use emotive_core::history::{HistoryEntry, HistoryStore};
use std::sync::{Arc, Weak};
use tokio::task::JoinHandle;

pub struct AnalysisSession {
    id: String,
    analyzer: Arc<EmotionAnalyzer>,
    summarizer: Arc<TrendSummarizer>,
    /// The only strong reference; detached submissions hold a `Weak`.
    history: Arc<HistoryStore>,
}

impl AnalysisSession {
    pub fn new(
        id: impl Into<String>,
        analyzer: Arc<EmotionAnalyzer>,
        summarizer: Arc<TrendSummarizer>,
        history_capacity: usize,
    ) -> Self {
        Self {
            id: id.into(),
            analyzer,
            summarizer,
            history: Arc::new(HistoryStore::new(history_capacity)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn history_capacity(&self) -> usize {
        self.history.capacity()
    }

    /// Analyzes `text` and records the profile on success.
    ///
    /// Dropping the returned future cancels the inference call and nothing
    /// is recorded.
    pub async fn submit(&self, text: &str) -> AnalysisResult {
        let profile = self.analyzer.analyze(text).await?;
        let entry = self.history.append(text, profile.clone()).await;
        tracing::debug!(
            "[AnalysisSession] Session {} recorded entry {}",
            self.id,
            entry.id()
        );
        Ok(profile)
    }

    /// Runs a submission on a detached task.
    ///
    /// The task keeps running if the caller stops waiting. It only holds a
    /// weak reference to the history, so if the session has been dropped by
    /// the time inference completes the result is returned but not recorded.
    pub fn spawn_submit(&self, text: impl Into<String>) -> JoinHandle<AnalysisResult> {
        let text = text.into();
        let session_id = self.id.clone();
        let analyzer = Arc::clone(&self.analyzer);
        let history: Weak<HistoryStore> = Arc::downgrade(&self.history);

        tokio::spawn(async move {
            let profile = analyzer.analyze(&text).await?;
            match history.upgrade() {
                Some(store) => {
                    store.append(text, profile.clone()).await;
                }
                None => tracing::info!(
                    "[AnalysisSession] Session {} closed before analysis finished, result not recorded",
                    session_id
                ),
            }
            Ok(profile)
        })
    }

    /// Copy of the history, oldest first.
    pub async fn snapshot(&self) -> Vec<HistoryEntry> {
        self.history.snapshot().await
    }

    /// `(dominant emotion, timestamp)` per history entry, oldest first.
    pub async fn trend_observations(&self) -> Vec<TrendObservation> {
        self.history.trend_observations().await
    }

    /// Summarizes the trend across the current history.
    pub async fn summarize_trend(&self) -> TrendResult {
        let observations = self.trend_observations().await;
        self.summarizer.summarize(&observations).await
    }
}
