//! Chat API Handler

use axum::{Json, extract::State};

use crate::core::AppState;
use crate::llm::resolve_model;
use crate::utils::{AppError, AppResult, MAX_PROMPT_LEN, validate_required_text};
use shared::models::{ChatRequest, ChatResponse};

/// POST /chat - forward a prompt to the hosted inference API
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let prompt = payload
        .prompt
        .as_deref()
        .ok_or_else(|| AppError::validation("prompt is required"))?;
    validate_required_text(prompt, "prompt", MAX_PROMPT_LEN)?;

    let llm_name = payload
        .llm_name
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::validation("llm_name is required"))?;
    let model = resolve_model(llm_name)
        .ok_or_else(|| AppError::validation(format!("Invalid model name '{llm_name}'")))?;

    let response = state.llm.chat(model, prompt).await?;

    Ok(Json(ChatResponse { response }))
}
