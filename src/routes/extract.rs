use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart,
    },
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};

use crate::extraction::DocumentProcessor;
use crate::models::{AppState, ExtractResponse};
use crate::types::{AppError, AppResult};

/// Multipart field carrying the upload.
const FILE_FIELD: &str = "file";

pub fn router(state: AppState) -> Router {
    let max_upload_bytes = state.config.server.max_upload_bytes;

    Router::new()
        .route("/api/extract", post(extract_text))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

async fn extract_text(
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ExtractResponse>> {
    let mut multipart = multipart.map_err(|rejection| {
        warn!(error = %rejection, "Extract request without a multipart body");
        AppError::MissingFile
    })?;

    let field = loop {
        match multipart
            .next_field()
            .await
            .map_err(multipart_error)?
        {
            Some(field) if field.name() == Some(FILE_FIELD) => break field,
            Some(_) => continue,
            None => return Err(AppError::MissingFile),
        }
    };

    // Name and suffix are validated before the body of the field is read
    let filename = field.file_name().map(str::to_string);
    let format = DocumentProcessor::resolve_format(filename.as_deref())?;

    let content = field
        .bytes()
        .await
        .map_err(multipart_error)?;

    info!(
        filename = filename.as_deref().unwrap_or_default(),
        %format,
        size = content.len(),
        "File upload received"
    );

    let text = DocumentProcessor::process_document(format, content).await?;

    Ok(Json(ExtractResponse { text }))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::InvalidRequest(err.body_text())
    }
}
