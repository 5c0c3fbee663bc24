//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/` - Liveness probe
//! - `/api/health` - Health details for operators
//! - `/api/extract` - Document upload to plain text
//! - `/api/generate` - Formatted document generation
//! - `/api/analyze` - Document structure analysis

pub mod health;
pub mod extract;
pub mod generate;
pub mod analyze;

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::apply_cors;
use crate::models::AppState;
use crate::types::AppError;

/// JSON extractor whose rejections use the `{"detail"}` error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let api_router = Router::new()
        .merge(extract::router(state.clone()))
        .merge(generate::router(state.clone()))
        .merge(analyze::router(state.clone()))
        .merge(health::router(state));

    apply_cors(api_router).layer(TraceLayer::new_for_http())
}
