//! Core domain of Emotive: emotion profiles, the inference boundary, the
//! bounded analysis history and configuration.

pub mod analysis;
pub mod clock;
pub mod config;
pub mod emotion;
pub mod error;
pub mod history;
pub mod inference;
pub mod secret;

// Re-export common types
pub use analysis::{AnalysisError, AnalysisErrorKind, AnalysisResult, TrendObservation, TrendSummary};
pub use emotion::EmotionProfile;
pub use error::EmotiveError;
pub use history::{HistoryEntry, HistoryStore};
pub use inference::{InferenceCapability, InferenceError};
