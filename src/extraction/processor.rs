use bytes::Bytes;
use tracing::{debug, info};

use super::DocumentFormat;
use crate::types::{AppError, AppResult};

pub struct DocumentProcessor;

impl DocumentProcessor {
    /// Resolve the parser for an upload, failing before any bytes are read
    /// when the name is missing or the suffix is not one we handle.
    pub fn resolve_format(filename: Option<&str>) -> AppResult<DocumentFormat> {
        let filename = filename.filter(|name| !name.is_empty()).ok_or(AppError::MissingFile)?;

        let format = DocumentFormat::from_filename(filename);
        if !format.is_supported() {
            return Err(AppError::UnsupportedFormat);
        }
        Ok(format)
    }

    /// Parse the whole upload into text. Parsing is CPU-bound, so it runs
    /// on the blocking pool.
    pub async fn process_document(format: DocumentFormat, content: Bytes) -> AppResult<String> {
        debug!(%format, size = content.len(), "Extracting document text");

        let result = tokio::task::spawn_blocking(move || {
            format.extract(&content).map(|parsed| parsed.map_err(|e| e.to_string()))
        })
        .await
        .map_err(|e| AppError::ExtractionFailed(format!("Extraction task failed: {}", e)))?;

        let text = match result {
            Some(parsed) => parsed.map_err(AppError::ExtractionFailed)?,
            None => return Err(AppError::UnsupportedFormat),
        };

        info!(%format, chars = text.chars().count(), "Document text extracted");
        Ok(text)
    }
}
