//! History entry model.

use crate::analysis::TrendObservation;
use crate::emotion::EmotionProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Creation-order identifier of a history entry, unique within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEntryId(u64);

impl HistoryEntryId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for HistoryEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored `(text, profile)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    id: HistoryEntryId,
    source_text: String,
    profile: EmotionProfile,
}

impl HistoryEntry {
    pub(crate) fn new(id: HistoryEntryId, source_text: String, profile: EmotionProfile) -> Self {
        Self {
            id,
            source_text,
            profile,
        }
    }

    pub fn id(&self) -> HistoryEntryId {
        self.id
    }

    /// The submitted text, verbatim.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn profile(&self) -> &EmotionProfile {
        &self.profile
    }

    pub fn to_observation(&self) -> TrendObservation {
        TrendObservation::new(self.profile.dominant_emotion(), self.profile.timestamp())
    }
}
