//! HTTP client for the hosted chat-completions API

use std::time::Duration;

use axum::http::StatusCode;
use serde::Deserialize;

use crate::utils::{AppError, AppResult};

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Assistant persona sent with every request
const SYSTEM_PROMPT: &str = "You are a Smart City Complaints Assistant. Your role is to help \
     users report issues like potholes, waste collection, and broken streetlights, and provide \
     updates on reported problems. Respond concisely and professionally.";

const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.85;
const MAX_TOKENS: u32 = 1500;

/// Fallback when the upstream response carries no completion text
const EMPTY_COMPLETION_FALLBACK: &str = "No response received.";

/// Caller-facing alias -> concrete model identifier
///
/// Static configuration data; an alias outside this table is a client
/// error, never forwarded upstream.
const MODEL_ALIASES: &[(&str, &str)] = &[
    ("Google-Gemma", "google/gemma-2-9b-it"),
    ("Mistral", "mistralai/Mistral-7B-Instruct-v0.2"),
    ("Microsoft-Phi", "microsoft/Phi-3-mini-4k-instruct"),
    ("Meta-Llama", "meta-llama/Meta-Llama-3.1-8B-Instruct"),
];

/// Resolve a caller alias to its concrete model identifier
pub fn resolve_model(alias: &str) -> Option<&'static str> {
    MODEL_ALIASES
        .iter()
        .find(|(name, _)| *name == alias)
        .map(|(_, model)| *model)
}

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for the hosted chat-completions endpoint
///
/// Holds a connection pool and the bearer key; cheap to clone into
/// handlers via application state.
#[derive(Clone)]
pub struct LlmClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + CHAT_COMPLETIONS_PATH)
    url: String,
}

impl LlmClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{CHAT_COMPLETIONS_PATH}", base.trim_end_matches('/'));
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            url,
        }
    }

    /// Forward a prompt and return the first completion's text
    ///
    /// `model` must already be a concrete identifier (see
    /// [`resolve_model`]). A non-success upstream status is relayed to
    /// the caller; transport and decode failures map to 500.
    pub async fn chat(&self, model: &str, prompt: &str) -> AppResult<String> {
        let request = ApiRequest {
            model,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ApiMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
            stream: false,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::internal(format!("Inference request failed: {e}")))?;

        if !response.status().is_success() {
            let status =
                StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            return Err(AppError::Upstream(
                status,
                "Failed to fetch response from the inference API".to_string(),
            ));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::internal(format!("Failed to parse inference response: {e}")))?;

        Ok(api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_else(|| EMPTY_COMPLETION_FALLBACK.to_string()))
    }
}
