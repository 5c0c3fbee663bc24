//! Formatter Agent
//!
//! Builds the multi-turn payload for a document formatting request: the prior
//! conversation in its original order, followed by one composite user turn
//! holding the persona, the reference documents and the constraints.

use crate::llm::LLMAdapter;
use crate::models::{ChatMessage, GenerateRequest, GenerateResponse};
use crate::types::{AppError, AppResult, LLMMessage, LLMRequest, Role};
use tracing::{error, info};

pub const SYSTEM_INSTRUCTION: &str = "You are an expert document formatter and content specialist. \n\
Your primary goal is to take the \"Content to Reformat\" and apply the exact structural, stylistic, and formatting patterns found in the \"Sample Document\". \n\
Always output high-quality Markdown. Explain your formatting decisions briefly at the end of the response.";

pub const DEFAULT_CONSTRAINT: &str = "- Maintain professional tone and standard markdown.";

pub const TEMPERATURE: f32 = 0.7;

pub struct FormatterAgent;

impl FormatterAgent {
    /// Bulleted constraint list, or the default line when none were given.
    pub fn format_constraints(constraints: &[String]) -> String {
        if constraints.is_empty() {
            return DEFAULT_CONSTRAINT.to_string();
        }

        constraints
            .iter()
            .map(|c| format!("- {}", c))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn create_context_block(sample_document: &str, content_document: &str, constraints: &[String]) -> String {
        format!(
            "\n## SAMPLE DOCUMENT (Format Reference):\n{}\n\n## CONTENT TO REFORMAT:\n{}\n\n## SPECIFIC CONSTRAINTS:\n{}\n",
            sample_document,
            content_document,
            Self::format_constraints(constraints)
        )
    }

    /// The final user turn: persona, context block, then the actual request.
    pub fn create_user_prompt(request: &GenerateRequest) -> String {
        let context = Self::create_context_block(
            request.sample_document(),
            request.content_document(),
            &request.constraints,
        );

        format!("{}\n\n{}\n\nUser Request: {}", SYSTEM_INSTRUCTION, context, request.user_message)
    }

    /// History turns in chronological order with the composite prompt last.
    /// Always `previous_messages.len() + 1` turns long.
    pub fn build_messages(request: &GenerateRequest) -> Vec<LLMMessage> {
        let mut messages: Vec<LLMMessage> = request
            .previous_messages
            .iter()
            .map(|ChatMessage { role, content }| LLMMessage::new(Role::from_wire(role), content.clone()))
            .collect();

        messages.push(LLMMessage::user(Self::create_user_prompt(request)));
        messages
    }

    pub fn create_request(request: &GenerateRequest, model: &str) -> LLMRequest {
        LLMRequest {
            model: model.to_string(),
            messages: Self::build_messages(request),
            temperature: Some(TEMPERATURE),
            // The persona travels inside the final user turn
            system_instruction: None,
        }
    }

    pub async fn generate(
        llm: &dyn LLMAdapter,
        model: &str,
        request: &GenerateRequest,
    ) -> AppResult<GenerateResponse> {
        let llm_request = Self::create_request(request, model);

        info!(
            provider = llm.name(),
            model,
            history_len = request.previous_messages.len(),
            constraints = request.constraints.len(),
            "Generating formatted document"
        );

        match llm.create_chat_completion(&llm_request).await {
            Ok(response) => {
                info!(
                    response_len = response.content.len(),
                    input_tokens = response.usage.prompt_tokens,
                    output_tokens = response.usage.completion_tokens,
                    "Generation completed"
                );
                Ok(GenerateResponse {
                    content: response.content,
                    usage: response.usage.into(),
                })
            }
            Err(e) => {
                error!(error = %e, details = ?e, "Gemini generation error");
                let message = match e {
                    AppError::LLMApi(message) => message,
                    other => other.to_string(),
                };
                Err(AppError::GenerationFailed(message))
            }
        }
    }
}
