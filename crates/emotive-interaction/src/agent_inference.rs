//! Adapter from a text-producing LLM agent to an [`InferenceCapability`].
//!
//! Requests are rendered into prompts with `ToPrompt` templates, the agent's
//! raw answer is reduced to its JSON payload and deserialized into the
//! requested response shape. Anything that does not fit the shape is
//! reported as `InferenceError::MalformedOutput`.

use async_trait::async_trait;
use emotive_core::inference::{
    InferenceCapability, InferenceError, ToneAnalysisRequest, ToneAnalysisResponse,
    TrendSummaryRequest, TrendSummaryResponse,
};
use llm_toolkit::ToPrompt;
use llm_toolkit::agent::{Agent, AgentError, Payload};
use serde::Serialize;
use serde::de::DeserializeOwned;

const TONE_OUTPUT_SCHEMA: &str = r#"{
  "dominantEmotion": string,             // the predominant emotion, e.g. "Happiness"
  "emotionIntensity": number,            // intensity of the dominant emotion, 0 to 1
  "emotionalBreakdown": {string: number} // every detected emotion and its score
}"#;

const TREND_OUTPUT_SCHEMA: &str = r#"{
  "summary": string // concise summary of the emotional trend
}"#;

#[derive(Debug, Clone, Serialize, ToPrompt)]
#[prompt(
    mode = "full",
    template = r#"You are an advanced AI trained in detecting human emotions from text.
Analyze the following text and determine the predominant emotion, its intensity, and a detailed breakdown of all emotions present.

Text: {{ text }}

Output a JSON object matching this schema:
{{ output_schema }}

Make sure the emotionalBreakdown scores sum to 1.0.
IMPORTANT: Output ONLY valid JSON, no markdown formatting or code blocks."#
)]
struct ToneAnalysisPrompt {
    text: String,
    output_schema: String,
}

#[derive(Debug, Clone, Serialize, ToPrompt)]
#[prompt(
    mode = "full",
    template = r#"You are an AI assistant that analyzes emotional trends over time from a series of emotion data points and provides a summary of the overall emotional trend.

Analyze the following emotional data points (oldest first):

{% for line in observations -%}
- {{ line }}
{% endfor %}
{% if observations | length == 0 -%}
(no data points recorded)
{% endif %}
Provide a concise summary of the emotional trends observed over time.

Output a JSON object matching this schema:
{{ output_schema }}

IMPORTANT: Output ONLY valid JSON, no markdown formatting or code blocks."#
)]
struct TrendSummaryPrompt {
    observations: Vec<String>,
    output_schema: String,
}

/// Runs tone analysis and trend summaries through any string-producing agent.
pub struct AgentInference<A> {
    agent: A,
}

impl<A> AgentInference<A>
where
    A: Agent<Output = String> + Send + Sync,
{
    pub fn new(agent: A) -> Self {
        Self { agent }
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    async fn run<T: DeserializeOwned>(&self, prompt: String) -> Result<T, InferenceError> {
        let raw = self
            .agent
            .execute(Payload::text(prompt))
            .await
            .map_err(map_agent_error)?;
        parse_structured(&raw)
    }
}

#[async_trait]
impl<A> InferenceCapability for AgentInference<A>
where
    A: Agent<Output = String> + Send + Sync,
{
    async fn analyze_tone(
        &self,
        request: &ToneAnalysisRequest,
    ) -> Result<ToneAnalysisResponse, InferenceError> {
        self.run(render_tone_prompt(request)).await
    }

    async fn summarize_trend(
        &self,
        request: &TrendSummaryRequest,
    ) -> Result<TrendSummaryResponse, InferenceError> {
        self.run(render_trend_prompt(request)).await
    }
}

fn render_tone_prompt(request: &ToneAnalysisRequest) -> String {
    use llm_toolkit::prompt::ToPrompt;

    ToneAnalysisPrompt {
        text: request.text.clone(),
        output_schema: TONE_OUTPUT_SCHEMA.to_string(),
    }
    .to_prompt()
}

fn render_trend_prompt(request: &TrendSummaryRequest) -> String {
    use llm_toolkit::prompt::ToPrompt;

    TrendSummaryPrompt {
        observations: request
            .points
            .iter()
            .map(|point| format!("Emotion: {}, Timestamp: {}", point.emotion, point.timestamp))
            .collect(),
        output_schema: TREND_OUTPUT_SCHEMA.to_string(),
    }
    .to_prompt()
}

/// Extracts the JSON document from a model answer and deserializes it.
fn parse_structured<T: DeserializeOwned>(raw: &str) -> Result<T, InferenceError> {
    let json = llm_toolkit::extract_json(raw).map_err(|e| {
        InferenceError::malformed(format!("model output contained no JSON object: {e}"))
    })?;

    serde_json::from_str(&json).map_err(|e| {
        InferenceError::malformed(format!("model output did not match the expected shape: {e}"))
    })
}

fn map_agent_error(err: AgentError) -> InferenceError {
    match err {
        AgentError::ProcessError {
            status_code,
            message,
            ..
        } => InferenceError::Upstream {
            status: status_code,
            message,
        },
        AgentError::ExecutionFailed(message) => InferenceError::Transport(message),
        other => InferenceError::Other(Some(other.to_string())),
    }
}
