//! GeminiApiAgent - REST client for Gemini `generateContent`.
//!
//! Every analysis is a single user turn, so the request carries exactly one
//! content block. The API key travels in the `x-goog-api-key` header and never
//! appears in URLs or error messages.

use async_trait::async_trait;
use emotive_core::config::{DEFAULT_GEMINI_MODEL, GeminiConfig};
use llm_toolkit::agent::{Agent, AgentError, Payload};
use reqwest::header::{HeaderMap, HeaderValue, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Single-turn Gemini agent returning the raw text of the first candidate.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: String,
    model: String,
    generation: GenerationConfig,
}

impl GeminiApiAgent {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            generation: GenerationConfig::default(),
        }
    }

    /// Builds an agent from `secret.json` settings.
    ///
    /// Model resolution order: the secret entry, `fallback_model`, then
    /// `gemini-2.5-flash`.
    pub fn from_config(
        config: &GeminiConfig,
        fallback_model: Option<&str>,
    ) -> Result<Self, AgentError> {
        if config.api_key.trim().is_empty() {
            return Err(AgentError::ExecutionFailed(
                "Gemini API key is empty".to_string(),
            ));
        }

        let model = config
            .model_name
            .as_deref()
            .or(fallback_model)
            .unwrap_or(DEFAULT_GEMINI_MODEL);
        Ok(Self::new(config.api_key.clone(), model))
    }

    /// Constrains the response to a bare JSON document.
    pub fn with_json_output(mut self) -> Self {
        self.generation.response_mime_type = Some("application/json".to_string());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.generation.temperature = Some(temperature);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{ENDPOINT}/{}:generateContent", self.model)
    }

    fn request_body(&self, prompt: String) -> GenerateRequest {
        GenerateRequest {
            contents: [Turn {
                role: "user",
                parts: [TextPart { text: prompt }],
            }],
            generation_config: (!self.generation.is_empty()).then(|| self.generation.clone()),
        }
    }

    async fn generate(&self, prompt: String) -> Result<String, AgentError> {
        tracing::debug!(
            "[GeminiApiAgent] generateContent on {} ({} prompt chars)",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = retry_after(response.headers());
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("[GeminiApiAgent] generateContent returned {}", status);
            return Err(status_error(status, &body, retry_after));
        }

        let reply: GenerateResponse = response.json().await.map_err(|err| {
            AgentError::Other(format!("Unreadable Gemini response: {}", err.without_url()))
        })?;
        reply.first_text().ok_or_else(|| {
            AgentError::ExecutionFailed("Gemini response contained no text".to_string())
        })
    }
}

#[async_trait]
impl Agent for GeminiApiAgent {
    type Output = String;

    fn expertise(&self) -> &str {
        "Emotional tone analysis and trend summarization via Gemini"
    }

    async fn execute(&self, payload: Payload) -> Result<Self::Output, AgentError> {
        let prompt = payload.to_text();
        if prompt.trim().is_empty() {
            return Err(AgentError::ExecutionFailed(
                "Gemini prompt is empty".to_string(),
            ));
        }
        self.generate(prompt).await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: [Turn; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Turn {
    role: &'static str,
    parts: [TextPart; 1],
}

#[derive(Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl GenerationConfig {
    fn is_empty(&self) -> bool {
        self.response_mime_type.is_none() && self.temperature.is_none()
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

impl GenerateResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .find_map(|part| part.text)
    }
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    status: String,
    message: Option<String>,
}

fn transport_error(err: reqwest::Error) -> AgentError {
    let is_retryable = err.is_connect() || err.is_timeout();
    AgentError::ProcessError {
        status_code: None,
        message: format!("Gemini request failed: {}", err.without_url()),
        is_retryable,
        retry_after: None,
    }
}

fn status_error(status: StatusCode, body: &str, retry_after: Option<Duration>) -> AgentError {
    let message = match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(ApiErrorEnvelope { error }) => {
            let detail = error.message.unwrap_or_else(|| body.to_string());
            if error.status.is_empty() {
                detail
            } else {
                format!("{}: {}", error.status, detail)
            }
        }
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => body.to_string(),
    };
    let is_retryable = status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error();

    match retry_after {
        Some(delay) => AgentError::process_error_with_retry_after(
            status.as_u16(),
            message,
            is_retryable,
            delay,
        ),
        None => AgentError::ProcessError {
            status_code: Some(status.as_u16()),
            message,
            is_retryable,
            retry_after: None,
        },
    }
}

/// Delay-seconds form of `Retry-After`; HTTP-date values are ignored.
fn retry_after(headers: &HeaderMap<HeaderValue>) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
        .map(Duration::from_secs)
}
