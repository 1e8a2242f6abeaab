//! Application layer for Emotive.
//!
//! This crate coordinates the inference capability and the history store to
//! implement the analysis use cases: analyzing text, recording results and
//! summarizing emotional trends.

mod inference_call;

pub mod analysis_session;
pub mod emotion_analyzer;
pub mod session;
pub mod trend_summarizer;

pub use analysis_session::AnalysisSession;
pub use emotion_analyzer::EmotionAnalyzer;
pub use session::{SessionFactory, SessionManager};
pub use trend_summarizer::{EMPTY_TREND_SUMMARY, TrendSummarizer};
