use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::AnalysisResult;

/// Canned upstream used in scaffold mode, so the proxy and client can be run
/// end to end without a model API key.
#[derive(Default)]
pub struct MockLlmClient {
    delay: Duration,
}

impl MockLlmClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    fn canned_analysis() -> AnalysisResult {
        AnalysisResult {
            financial_summary: "<ul><li>Mock financial summary</li></ul>".to_string(),
            key_issues: "<ul><li>Mock key issue</li></ul>".to_string(),
            loopholes: "<ul><li>Mock loophole</li></ul>".to_string(),
            legal_citations: "<ul><li>Mock citation</li></ul>".to_string(),
            simplified_text: "Mock simplified text.".to_string(),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(
        &self,
        _prompt: &str,
        structured_output: bool,
    ) -> Result<String, LlmClientError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if structured_output {
            serde_json::to_string(&Self::canned_analysis())
                .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))
        } else {
            Ok("Mock answer".to_string())
        }
    }
}
