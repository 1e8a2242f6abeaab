//! Bounded, insertion-ordered history of analyses.

use super::{HistoryEntry, HistoryEntryId};
use crate::analysis::TrendObservation;
use crate::emotion::EmotionProfile;
use std::collections::VecDeque;
use tokio::sync::RwLock;

/// Number of entries kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

#[derive(Debug)]
struct HistoryState {
    entries: VecDeque<HistoryEntry>,
    next_id: u64,
}

/// Sliding window over the most recently appended analyses.
///
/// `append` is the only mutator. Writers are serialized by the lock, so id
/// assignment, insertion and eviction happen as one step. Readers receive
/// owned copies and can never mutate stored entries.
#[derive(Debug)]
pub struct HistoryStore {
    capacity: usize,
    state: RwLock<HistoryState>,
}

impl HistoryStore {
    /// Creates a store holding at most `capacity` entries.
    ///
    /// A capacity of zero would drop every entry on insert and is replaced by
    /// [`DEFAULT_HISTORY_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            tracing::warn!(
                "[HistoryStore] Capacity 0 requested, using default {}",
                DEFAULT_HISTORY_CAPACITY
            );
            DEFAULT_HISTORY_CAPACITY
        } else {
            capacity
        };

        Self {
            capacity,
            state: RwLock::new(HistoryState {
                entries: VecDeque::with_capacity(capacity),
                next_id: 1,
            }),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a new entry at the newest end, evicting the oldest one when
    /// the store is full.
    ///
    /// # Returns
    ///
    /// A copy of the stored entry, including its assigned id.
    pub async fn append(&self, source_text: impl Into<String>, profile: EmotionProfile) -> HistoryEntry {
        let mut state = self.state.write().await;

        let id = HistoryEntryId::new(state.next_id);
        state.next_id += 1;

        let entry = HistoryEntry::new(id, source_text.into(), profile);
        state.entries.push_back(entry.clone());

        if state.entries.len() > self.capacity {
            if let Some(evicted) = state.entries.pop_front() {
                tracing::debug!("[HistoryStore] Evicted entry {}", evicted.id());
            }
        }

        entry
    }

    /// Copy of all entries, oldest first.
    pub async fn snapshot(&self) -> Vec<HistoryEntry> {
        let state = self.state.read().await;
        state.entries.iter().cloned().collect()
    }

    /// `(dominant emotion, timestamp)` of every entry, oldest first.
    pub async fn trend_observations(&self) -> Vec<TrendObservation> {
        let state = self.state.read().await;
        state.entries.iter().map(HistoryEntry::to_observation).collect()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn profile(emotion: &str, minute: i64) -> EmotionProfile {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        EmotionProfile::new(
            emotion,
            0.5,
            BTreeMap::from([(emotion.to_string(), 1.0)]),
            base + Duration::minutes(minute),
        )
    }

    #[tokio::test]
    async fn test_append_assigns_increasing_ids() {
        let store = HistoryStore::default();

        let first = store.append("a", profile("Joy", 0)).await;
        let second = store.append("b", profile("Sadness", 1)).await;

        assert!(second.id() > first.id());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_sliding_window_evicts_oldest_first() {
        let store = HistoryStore::new(3);
        for i in 0..5 {
            store.append(format!("t{i}"), profile("Joy", i)).await;
        }

        let texts: Vec<String> = store
            .snapshot()
            .await
            .iter()
            .map(|e| e.source_text().to_string())
            .collect();

        assert_eq!(texts, vec!["t2", "t3", "t4"]);
    }

    #[tokio::test]
    async fn test_ids_stay_unique_after_eviction() {
        let store = HistoryStore::new(2);
        let mut ids = Vec::new();
        for i in 0..6 {
            ids.push(store.append("x", profile("Joy", i)).await.id());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[tokio::test]
    async fn test_source_text_is_stored_verbatim() {
        let store = HistoryStore::default();
        store.append("  padded text \n", profile("Joy", 0)).await;

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot[0].source_text(), "  padded text \n");
    }

    #[tokio::test]
    async fn test_snapshot_is_detached_copy() {
        let store = HistoryStore::default();
        store.append("a", profile("Joy", 0)).await;

        let mut snapshot = store.snapshot().await;
        snapshot.clear();

        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_trend_observations_follow_insertion_order() {
        let store = HistoryStore::default();
        store.append("a", profile("Joy", 5)).await;
        store.append("b", profile("Anger", 1)).await;

        let observations = store.trend_observations().await;

        assert_eq!(observations[0].emotion, "Joy");
        assert_eq!(observations[1].emotion, "Anger");
    }

    #[test]
    fn test_zero_capacity_falls_back_to_default() {
        assert_eq!(HistoryStore::new(0).capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_respect_capacity() {
        let store = Arc::new(HistoryStore::new(10));
        let mut handles = Vec::new();
        for i in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(format!("t{i}"), profile("Joy", i)).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 10);
        let ids: Vec<u64> = snapshot.iter().map(|e| e.id().value()).collect();
        assert_eq!(ids, (41..=50).collect::<Vec<u64>>());
    }
}
