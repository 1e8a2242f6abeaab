//! Analysis outcome types shared by the analyzer, the summarizer and callers.

mod error;
mod trend;

pub use error::{
    AnalysisError, AnalysisErrorKind, EMPTY_INPUT_MESSAGE, Operation, UNKNOWN_ERROR_MESSAGE,
};
pub use trend::{TrendObservation, TrendSummary};

use crate::emotion::EmotionProfile;

/// Outcome of one analysis: a profile, or a classified failure.
pub type AnalysisResult = Result<EmotionProfile, AnalysisError>;

/// Outcome of one trend summarization.
pub type TrendResult = Result<TrendSummary, AnalysisError>;
