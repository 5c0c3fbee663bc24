#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use reportgen::config::{Config, LLMConfig, ServerConfig};
use reportgen::llm::{GoogleAdapter, LLMAdapter};
use reportgen::types::{AppError, AppResult, LLMRequest, LLMResponse, TokenUsage};
use reportgen::{create_router, AppState};
use std::sync::Mutex;

pub const BOUNDARY: &str = "reportgen-test-boundary";

pub fn test_config(api_base: &str) -> Config {
    Config {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
            max_upload_bytes: 1024 * 1024,
        },
        llm: LLMConfig {
            google_api_key: "test-key".to_string(),
            model: "gemini-test".to_string(),
            api_base: api_base.to_string(),
            timeout_secs: 5,
        },
    }
}

/// Records every request and answers from a fixed script.
pub struct StubLLM {
    pub requests: Mutex<Vec<LLMRequest>>,
    reply: Result<LLMResponse, String>,
}

impl StubLLM {
    pub fn replying(content: &str, usage: TokenUsage) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Ok(LLMResponse {
                content: content.to_string(),
                finish_reason: Some("STOP".to_string()),
                usage,
            }),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Err(message.to_string()),
        })
    }
}

#[async_trait]
impl LLMAdapter for StubLLM {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().map_err(AppError::LLMApi)
    }

    fn name(&self) -> &str {
        "stub"
    }
}

pub fn app_with(llm: Arc<dyn LLMAdapter>) -> Router {
    create_router(AppState::new(test_config("http://127.0.0.1:9"), llm))
}

pub fn app_with_gemini(api_base: &str) -> Router {
    let config = test_config(api_base);
    let llm = GoogleAdapter::new(&config.llm).unwrap();
    create_router(AppState::new(config, Arc::new(llm)))
}

pub fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Single-part multipart upload. `filename: None` omits the attribute.
pub fn upload_request(field: &str, filename: Option<&str>, content: &[u8]) -> Request<Body> {
    let disposition = match filename {
        Some(name) => format!("form-data; name=\"{}\"; filename=\"{}\"", field, name),
        None => format!("form-data; name=\"{}\"", field),
    };

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(format!("Content-Disposition: {}\r\n", disposition).as_bytes());
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/extract")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
