use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::llm::LLMAdapter;
use crate::types::TokenUsage;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub llm: Arc<dyn LLMAdapter>,
}

impl AppState {
    pub fn new(config: Config, llm: Arc<dyn LLMAdapter>) -> Self {
        Self { config, llm }
    }
}

// Wire models. Field names follow the frontend's camelCase JSON.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub user_message: String,
    #[serde(default)]
    pub sample_document: Option<String>,
    #[serde(default)]
    pub content_document: Option<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub previous_messages: Vec<ChatMessage>,
}

impl GenerateRequest {
    pub fn sample_document(&self) -> &str {
        self.sample_document.as_deref().unwrap_or_default()
    }

    pub fn content_document(&self) -> &str {
        self.content_document.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl From<TokenUsage> for Usage {
    fn from(usage: TokenUsage) -> Self {
        Self {
            input_tokens: usage.prompt_tokens,
            output_tokens: usage.completion_tokens,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub content: String,
    pub usage: Usage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub document: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
    pub usage: Usage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub text: String,
}

/// Body of the `/` liveness probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub timestamp: String,
}
