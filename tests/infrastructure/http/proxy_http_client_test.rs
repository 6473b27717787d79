use std::sync::Arc;

use axum::Router;
use axum::Json;
use axum::http::StatusCode;
use serde_json::json;

use legalyze::application::ports::{LlmClientError, ProxyClient, ProxyError};
use legalyze::application::services::{AnalysisOrchestrator, ProxyService, RetryPolicy};
use legalyze::domain::{Action, AnalysisState, PageText};
use legalyze::infrastructure::http::HttpProxyClient;
use legalyze::infrastructure::llm::MockLlmClient;
use legalyze::presentation::{AppState, PROXY_PATH, create_router};

use crate::helpers::{
    RecordingLlmClient, StaticExtractor, TEST_MAX_BODY_BYTES, TEST_REQUEST_TIMEOUT,
    closed_address, no_retry, pdf_upload, proxy_router, spawn_server,
};

async fn client_for(router: Router) -> HttpProxyClient {
    let addr = spawn_server(router).await;
    HttpProxyClient::new(&format!("http://{addr}{PROXY_PATH}"))
}

#[tokio::test]
async fn given_running_proxy_when_calling_then_returns_response_text() {
    let llm = Arc::new(RecordingLlmClient::replying("The deposit is 60,000."));
    let client = client_for(proxy_router(Arc::clone(&llm), no_retry())).await;

    let text = client.call("What is the deposit?", Action::Qa).await.unwrap();

    assert_eq!(text, "The deposit is 60,000.");
    assert_eq!(llm.calls(), vec![("What is the deposit?".to_string(), false)]);
}

#[tokio::test]
async fn given_upstream_rate_limit_when_calling_then_status_error() {
    let llm = Arc::new(RecordingLlmClient::new(vec![Err(LlmClientError::Upstream {
        status: 429,
        status_text: "Too Many Requests".to_string(),
    })]));
    let client = client_for(proxy_router(llm, no_retry())).await;

    let err = client.call("q", Action::Qa).await.unwrap_err();

    assert!(matches!(err, ProxyError::Status(429)));
}

#[tokio::test]
async fn given_proxy_internal_error_when_calling_then_status_error() {
    let llm = Arc::new(RecordingLlmClient::new(vec![Err(
        LlmClientError::InvalidResponse("empty".to_string()),
    )]));
    let client = client_for(proxy_router(llm, no_retry())).await;

    let err = client.call("q", Action::Compare).await.unwrap_err();

    assert!(matches!(err, ProxyError::Status(500)));
}

#[tokio::test]
async fn given_error_body_with_ok_status_when_calling_then_invalid_body() {
    let router = Router::new().fallback(|| async {
        (StatusCode::OK, Json(json!({ "error": "quota exceeded" })))
    });
    let client = client_for(router).await;

    let err = client.call("q", Action::Qa).await.unwrap_err();

    match err {
        ProxyError::InvalidBody(message) => assert_eq!(message, "quota exceeded"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn given_unreachable_proxy_when_calling_then_transport_error() {
    let addr = closed_address().await;
    let client = HttpProxyClient::new(&format!("http://{addr}{PROXY_PATH}"));

    let err = client.call("q", Action::Qa).await.unwrap_err();

    assert!(matches!(err, ProxyError::Transport(_)));
}

#[tokio::test]
async fn given_mock_upstream_when_running_full_flow_then_reaches_ready_and_answers() {
    let router = create_router(AppState::new(
        ProxyService::new(Arc::new(MockLlmClient::default()), RetryPolicy::none()),
        TEST_MAX_BODY_BYTES,
    ));
    let client = client_for(router).await;
    let orchestrator = AnalysisOrchestrator::new(
        Arc::new(StaticExtractor::new(vec![PageText::new(
            1,
            "Rent is 20,000 per month.",
        )])),
        Arc::new(client),
        TEST_REQUEST_TIMEOUT,
    );

    let analysis = orchestrator.upload(pdf_upload("lease.pdf")).await.unwrap();
    let answer = orchestrator.ask_question("What is the rent?").await.unwrap();

    assert_eq!(orchestrator.state(), AnalysisState::Ready);
    assert!(!analysis.simplified_text.is_empty());
    assert_eq!(answer, "Mock answer");
}
