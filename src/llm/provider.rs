use async_trait::async_trait;
use crate::types::{AppResult, LLMRequest, LLMResponse};

/// A chat-style generative backend.
///
/// Handlers only see this trait, so the concrete provider is chosen once at
/// startup and tests can substitute a scripted implementation.
#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;

    /// Provider name used in logs.
    fn name(&self) -> &str;
}
