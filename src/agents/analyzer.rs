//! Analyzer Agent
//!
//! Breaks a document down into structure, formatting and tone so the
//! frontend can show what a sample document will impose on the output.

use crate::llm::LLMAdapter;
use crate::models::{AnalyzeRequest, AnalyzeResponse};
use crate::types::{AppError, AppResult, LLMMessage, LLMRequest};
use tracing::{error, info};

pub const SYSTEM_INSTRUCTION: &str = "You are a document analysis expert. Break down the provided document into its core components: \n\
1. Structural hierarchy (Headings, sections)\n\
2. Formatting style (Bold usage, list styles, tables)\n\
3. Tone and vocabulary level.";

// Lower than generation for more consistent, analytical output
pub const TEMPERATURE: f32 = 0.4;

pub struct AnalyzerAgent;

impl AnalyzerAgent {
    pub fn create_prompt(document: &str) -> String {
        format!("Analyze the structure and formatting of this document:\n\n{}", document)
    }

    pub fn create_request(document: &str, model: &str) -> LLMRequest {
        LLMRequest {
            model: model.to_string(),
            messages: vec![LLMMessage::user(Self::create_prompt(document))],
            temperature: Some(TEMPERATURE),
            system_instruction: Some(SYSTEM_INSTRUCTION.to_string()),
        }
    }

    pub async fn analyze(
        llm: &dyn LLMAdapter,
        model: &str,
        request: &AnalyzeRequest,
    ) -> AppResult<AnalyzeResponse> {
        if request.document.trim().is_empty() {
            return Err(AppError::InvalidRequest("document must not be empty".to_string()));
        }

        info!(provider = llm.name(), model, document_len = request.document.len(), "Analyzing document");

        let response = llm
            .create_chat_completion(&Self::create_request(&request.document, model))
            .await
            .map_err(|e| {
                error!(error = %e, details = ?e, "Gemini analysis error");
                match e {
                    AppError::LLMApi(message) => AppError::AnalysisFailed(message),
                    other => AppError::AnalysisFailed(other.to_string()),
                }
            })?;

        Ok(AnalyzeResponse {
            analysis: response.content,
            usage: response.usage.into(),
        })
    }
}
