mod common;

use axum::http::StatusCode;
use reportgen::types::{Role, TokenUsage};
use tower::ServiceExt;

#[tokio::test]
async fn generate_returns_content_and_usage() {
    let stub = common::StubLLM::replying(
        "# Report\n\nFormatted body",
        TokenUsage {
            prompt_tokens: 321,
            completion_tokens: 45,
        },
    );
    let app = common::app_with(stub.clone());

    let response = app
        .oneshot(common::json_request(
            "/api/generate",
            serde_json::json!({
                "userMessage": "Apply the sample layout",
                "sampleDocument": "# Title\n## Section",
                "contentDocument": "some notes",
                "constraints": ["A", "B"],
                "previousMessages": [
                    { "role": "user", "content": "hi" },
                    { "role": "assistant", "content": "hello" }
                ]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        common::body_json(response).await,
        serde_json::json!({
            "content": "# Report\n\nFormatted body",
            "usage": { "inputTokens": 321, "outputTokens": 45 }
        })
    );

    let requests = stub.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let messages = &requests[0].messages;
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].content, "hi");
    assert_eq!(messages[1].role, Role::Model);
    assert_eq!(messages[1].content, "hello");
    assert_eq!(messages[2].role, Role::User);
    assert!(messages[2].content.contains("## SPECIFIC CONSTRAINTS:\n- A\n- B\n"));
    assert!(messages[2].content.ends_with("User Request: Apply the sample layout"));
    assert_eq!(requests[0].temperature, Some(0.7));
}

#[tokio::test]
async fn generate_with_only_user_message_uses_defaults() {
    let stub = common::StubLLM::replying("ok", TokenUsage::default());
    let app = common::app_with(stub.clone());

    let response = app
        .oneshot(common::json_request(
            "/api/generate",
            serde_json::json!({ "userMessage": "Just tidy it" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        common::body_json(response).await["usage"],
        serde_json::json!({ "inputTokens": 0, "outputTokens": 0 })
    );

    let requests = stub.requests.lock().unwrap();
    assert_eq!(requests[0].messages.len(), 1);
    assert!(requests[0].messages[0]
        .content
        .contains("## SPECIFIC CONSTRAINTS:\n- Maintain professional tone and standard markdown.\n"));
}

#[tokio::test]
async fn generate_failure_is_tagged_server_error() {
    let app = common::app_with(common::StubLLM::failing("Resource has been exhausted"));

    let response = app
        .oneshot(common::json_request(
            "/api/generate",
            serde_json::json!({ "userMessage": "Format" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        common::body_json(response).await,
        serde_json::json!({
            "detail": "[ReportGen AI] Generation Failed: Resource has been exhausted"
        })
    );
}

#[tokio::test]
async fn malformed_body_is_client_error() {
    let app = common::app_with(common::StubLLM::replying("unused", TokenUsage::default()));

    let response = app
        .oneshot(common::json_request(
            "/api/generate",
            serde_json::json!({ "constraints": ["no message"] }),
        ))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert!(common::body_json(response).await["detail"].is_string());
}

#[tokio::test]
async fn generate_end_to_end_against_gemini_mock() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-test:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .match_body(mockito::Matcher::Regex(
            r#"\{"role":"user","parts":\[\{"text":"hi"\}\]\},\{"role":"model","parts":\[\{"text":"hello"\}\]\}"#
                .to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Formatted"}]},"finishReason":"STOP"}]}"#)
        .create_async()
        .await;

    let app = common::app_with_gemini(&server.url());
    let response = app
        .oneshot(common::json_request(
            "/api/generate",
            serde_json::json!({
                "userMessage": "Go",
                "previousMessages": [
                    { "role": "user", "content": "hi" },
                    { "role": "assistant", "content": "hello" }
                ]
            }),
        ))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        common::body_json(response).await,
        serde_json::json!({
            "content": "Formatted",
            "usage": { "inputTokens": 0, "outputTokens": 0 }
        })
    );
}

#[tokio::test]
async fn gemini_error_status_surfaces_in_detail() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/gemini-test:generateContent")
        .with_status(429)
        .with_body(r#"{"error":{"code":429,"message":"Quota exceeded for model","status":"RESOURCE_EXHAUSTED"}}"#)
        .create_async()
        .await;

    let app = common::app_with_gemini(&server.url());
    let response = app
        .oneshot(common::json_request(
            "/api/generate",
            serde_json::json!({ "userMessage": "Go" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let detail = common::body_json(response).await["detail"].as_str().unwrap().to_string();
    assert!(detail.starts_with("[ReportGen AI] Generation Failed: "));
    assert!(detail.contains("Quota exceeded for model"));
}

#[tokio::test]
async fn analyze_returns_analysis() {
    let stub = common::StubLLM::replying("Uses H1/H2 headings", TokenUsage::default());
    let app = common::app_with(stub.clone());

    let response = app
        .oneshot(common::json_request(
            "/api/analyze",
            serde_json::json!({ "document": "# Title\n## Part" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await["analysis"], "Uses H1/H2 headings");
    assert_eq!(stub.requests.lock().unwrap()[0].temperature, Some(0.4));
}
