use axum::{extract::State, routing::get, Json, Router};
use crate::models::{AppState, HealthResponse, StatusResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))
        .with_state(state)
}

async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Backend is running".to_string(),
    })
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.config.llm.model.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
