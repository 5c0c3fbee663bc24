use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use crate::agents::FormatterAgent;
use crate::models::{AppState, GenerateRequest, GenerateResponse};
use crate::routes::ApiJson;
use crate::types::AppResult;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate", post(generate_document))
        .with_state(state)
}

async fn generate_document(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateRequest>,
) -> AppResult<Json<GenerateResponse>> {
    info!(
        message_len = request.user_message.len(),
        previous_messages = request.previous_messages.len(),
        "Generate request received"
    );

    let response = FormatterAgent::generate(state.llm.as_ref(), &state.config.llm.model, &request).await?;

    Ok(Json(response))
}
