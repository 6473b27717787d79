use async_trait::async_trait;

/// Upstream model the proxy forwards prompts to.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends one prompt as a single content part. With `structured_output`
    /// set, the upstream is asked for strict JSON instead of free text.
    async fn generate(
        &self,
        prompt: &str,
        structured_output: bool,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("upstream timed out: {0}")]
    Timeout(String),
    #[error("upstream returned {status} {status_text}")]
    Upstream { status: u16, status_text: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmClientError {
    /// Network-level failures are the only ones worth retrying. A timeout has
    /// already spent the full upstream budget, so it is not retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, LlmClientError::Transport(_))
    }
}
