use super::factory::SessionFactory;
use crate::analysis_session::AnalysisSession;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Manages independent analysis sessions.
///
/// `SessionManager` is responsible for:
/// - Creating new sessions, each with its own history
/// - Looking up sessions by ID
/// - Closing sessions, which releases their history
pub struct SessionManager {
    /// Live sessions by ID
    sessions: Arc<RwLock<HashMap<String, Arc<AnalysisSession>>>>,
    factory: SessionFactory,
}

impl SessionManager {
    pub fn new(factory: SessionFactory) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            factory,
        }
    }

    /// Creates a session with a fresh UUID and registers it.
    pub async fn create_session(&self) -> Arc<AnalysisSession> {
        let session_id = Uuid::new_v4().to_string();
        let session = Arc::new(self.factory.create_session(session_id.clone()));

        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id.clone(), session.clone());

        tracing::info!("[SessionManager] Created session {}", session_id);
        session
    }

    /// Returns the session with the given ID, if it is still open.
    pub async fn get(&self, session_id: &str) -> Option<Arc<AnalysisSession>> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned()
    }

    /// Closes a session.
    ///
    /// Once the last handle to the session is dropped its history is gone and
    /// in-flight detached submissions will not record their results.
    ///
    /// # Returns
    ///
    /// `true` if the session existed.
    pub async fn close(&self, session_id: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        let removed = sessions.remove(session_id).is_some();
        if removed {
            tracing::info!("[SessionManager] Closed session {}", session_id);
        }
        removed
    }

    /// IDs of all open sessions.
    pub async fn session_ids(&self) -> Vec<String> {
        let sessions = self.sessions.read().await;
        sessions.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use emotive_core::config::AppConfig;
    use emotive_core::inference::{
        InferenceCapability, InferenceError, ToneAnalysisRequest, ToneAnalysisResponse,
        TrendSummaryRequest, TrendSummaryResponse,
    };
    use std::collections::BTreeMap;

    struct EchoInference;

    #[async_trait]
    impl InferenceCapability for EchoInference {
        async fn analyze_tone(
            &self,
            request: &ToneAnalysisRequest,
        ) -> Result<ToneAnalysisResponse, InferenceError> {
            Ok(ToneAnalysisResponse {
                dominant_emotion: request.text.clone(),
                emotion_intensity: 0.5,
                emotional_breakdown: BTreeMap::from([(request.text.clone(), 1.0)]),
            })
        }

        async fn summarize_trend(
            &self,
            request: &TrendSummaryRequest,
        ) -> Result<TrendSummaryResponse, InferenceError> {
            Ok(TrendSummaryResponse {
                summary: format!("{} points", request.points.len()),
            })
        }
    }

    fn manager(capacity: usize) -> SessionManager {
        let mut config = AppConfig::default();
        config.history.capacity = capacity;
        SessionManager::new(SessionFactory::from_config(&config, Arc::new(EchoInference)))
    }

    #[tokio::test]
    async fn test_sessions_do_not_share_history() {
        let manager = manager(10);
        let first = manager.create_session().await;
        let second = manager.create_session().await;

        first.submit("Joy").await.unwrap();
        first.submit("Anger").await.unwrap();
        second.submit("Fear").await.unwrap();

        assert_eq!(first.snapshot().await.len(), 2);
        assert_eq!(second.snapshot().await.len(), 1);
        assert_ne!(first.id(), second.id());
    }

    #[tokio::test]
    async fn test_configured_capacity_applies() {
        let manager = manager(2);
        let session = manager.create_session().await;
        for text in ["a", "b", "c"] {
            session.submit(text).await.unwrap();
        }

        assert_eq!(session.history_capacity(), 2);
        let texts: Vec<String> = session
            .snapshot()
            .await
            .iter()
            .map(|e| e.source_text().to_string())
            .collect();
        assert_eq!(texts, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn test_get_and_close() {
        let manager = manager(10);
        let session = manager.create_session().await;
        let id = session.id().to_string();

        assert!(manager.get(&id).await.is_some());
        assert_eq!(manager.session_ids().await, vec![id.clone()]);

        assert!(manager.close(&id).await);
        assert!(manager.get(&id).await.is_none());
        assert!(!manager.close(&id).await);
    }
}
