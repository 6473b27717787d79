use std::time::Duration;

use legalyze::application::ports::LlmClient;
use legalyze::domain::AnalysisResult;
use legalyze::infrastructure::llm::MockLlmClient;

#[tokio::test]
async fn given_structured_request_when_generating_then_returns_valid_analysis() {
    let client = MockLlmClient::default();

    let raw = client.generate("Analyze", true).await.unwrap();

    assert!(AnalysisResult::parse_strict(&raw).is_ok());
}

#[tokio::test]
async fn given_free_text_request_when_generating_then_returns_mock_answer() {
    let client = MockLlmClient::new(Duration::from_millis(1));

    let text = client.generate("What is the rent?", false).await.unwrap();

    assert_eq!(text, "Mock answer");
}
