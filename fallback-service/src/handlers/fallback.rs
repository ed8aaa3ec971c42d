use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

use crate::startup::AppState;

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FallbackResponse {
    pub text: String,
}

/// Forwards the prompt to the configured text provider exactly once.
///
/// Provider failures are not retried; they all surface as 502.
#[tracing::instrument(skip(state, request), fields(prompt_len = request.prompt.len()))]
pub async fn fallback(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> Result<Json<FallbackResponse>, AppError> {
    match state.text_provider.generate(&request.prompt).await {
        Ok(text) => {
            tracing::info!(response_len = text.len(), "Fallback generation succeeded");
            Ok(Json(FallbackResponse { text }))
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                error_type = e.kind(),
                "Fallback generation failed"
            );
            Err(AppError::BadGateway("text generation failed".to_string()))
        }
    }
}
