use axum::{extract::State, routing::post, Json, Router};

use crate::agents::AnalyzerAgent;
use crate::models::{AnalyzeRequest, AnalyzeResponse, AppState};
use crate::routes::ApiJson;
use crate::types::AppResult;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_document))
        .with_state(state)
}

async fn analyze_document(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeRequest>,
) -> AppResult<Json<AnalyzeResponse>> {
    let response = AnalyzerAgent::analyze(state.llm.as_ref(), &state.config.llm.model, &request).await?;
    Ok(Json(response))
}
