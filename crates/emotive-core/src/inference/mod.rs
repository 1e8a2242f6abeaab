//! Inference capability boundary.
//!
//! The analysis core never talks to a model directly. It depends on an
//! [`InferenceCapability`], which takes a typed request and returns the
//! requested output shape or an [`InferenceError`].
//!
//! # Module Structure
//!
//! - `request`: request/response shapes for tone analysis and trend summaries
//! - `error`: the failure signal returned by backends

mod error;
mod request;

pub use error::InferenceError;
pub use request::{
    ToneAnalysisRequest, ToneAnalysisResponse, TrendPoint, TrendSummaryRequest,
    TrendSummaryResponse,
};

use async_trait::async_trait;

/// Structured-output generation service used for analysis and summaries.
///
/// Implementations are treated as stateless: calls may be repeated or run
/// concurrently without session affinity.
#[async_trait]
pub trait InferenceCapability: Send + Sync {
    /// Produces an emotion profile for the given text.
    async fn analyze_tone(
        &self,
        request: &ToneAnalysisRequest,
    ) -> Result<ToneAnalysisResponse, InferenceError>;

    /// Produces a free-text summary of an ordered series of observations.
    async fn summarize_trend(
        &self,
        request: &TrendSummaryRequest,
    ) -> Result<TrendSummaryResponse, InferenceError>;
}
