//! Inference backends for Emotive.
//!
//! - [`GeminiApiAgent`]: REST client for the Gemini API
//! - [`AgentInference`]: turns any text-producing agent into an
//!   [`InferenceCapability`](emotive_core::inference::InferenceCapability)

pub mod agent_inference;
pub mod gemini_api_agent;

pub use agent_inference::AgentInference;
pub use gemini_api_agent::GeminiApiAgent;
