use std::sync::Arc;
use std::time::Duration;

use axum::http::{Method, StatusCode};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{ProxyRequest, ProxyResponse};

pub const METHOD_NOT_ALLOWED_BODY: &str = "Method Not Allowed";

/// Retry schedule for transport failures reaching the upstream model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            initial_backoff: Duration::ZERO,
        }
    }

    /// Doubles per attempt, starting at `initial_backoff`.
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.initial_backoff
            .saturating_mul(1u32.checked_shl(attempt).unwrap_or(u32::MAX))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff: Duration::from_millis(250),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyReplyBody {
    Json(ProxyResponse),
    Text(String),
}

/// Framework-independent reply; the HTTP layer only copies it onto the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyReply {
    pub status: StatusCode,
    pub body: ProxyReplyBody,
}

impl ProxyReply {
    fn json(status: StatusCode, payload: ProxyResponse) -> Self {
        Self {
            status,
            body: ProxyReplyBody::Json(payload),
        }
    }

    fn text(status: StatusCode, text: impl Into<String>) -> Self {
        Self {
            status,
            body: ProxyReplyBody::Text(text.into()),
        }
    }
}

/// Stateless handler that forwards prompts to the upstream model. The
/// upstream credential lives inside the [`LlmClient`] and never reaches a
/// reply.
pub struct ProxyService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    retry_policy: RetryPolicy,
}

impl<L> ProxyService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>, retry_policy: RetryPolicy) -> Self {
        Self {
            llm_client,
            retry_policy,
        }
    }

    #[tracing::instrument(skip(self, body), fields(body_len = body.len()))]
    pub async fn handle(&self, method: &Method, body: &[u8]) -> ProxyReply {
        if *method != Method::POST {
            tracing::warn!("Rejected proxy request with unsupported method");
            return ProxyReply::text(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_BODY);
        }

        let request: ProxyRequest = match serde_json::from_slice(body) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed proxy request body");
                return ProxyReply::json(
                    StatusCode::BAD_REQUEST,
                    ProxyResponse::failure(format!("Invalid request body: {}", e)),
                );
            }
        };

        let structured_output = request.action.requires_structured_output();
        tracing::debug!(
            action = %request.action,
            structured_output,
            prompt_chars = request.prompt.chars().count(),
            "Forwarding prompt upstream"
        );

        match self
            .generate_with_retry(&request.prompt, structured_output)
            .await
        {
            Ok(text) => {
                tracing::info!(action = %request.action, "Upstream completion relayed");
                ProxyReply::json(StatusCode::OK, ProxyResponse::success(text))
            }
            Err(LlmClientError::Upstream {
                status,
                status_text,
            }) => {
                tracing::warn!(status, status_text = %status_text, "Relaying upstream error");
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                ProxyReply::text(status, status_text)
            }
            Err(e) => {
                tracing::error!(error = %e, "Proxy request failed");
                ProxyReply::json(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProxyResponse::failure(e.to_string()),
                )
            }
        }
    }

    async fn generate_with_retry(
        &self,
        prompt: &str,
        structured_output: bool,
    ) -> Result<String, LlmClientError> {
        let mut attempt = 0;

        loop {
            match self.llm_client.generate(prompt, structured_output).await {
                Err(e) if e.is_transient() && attempt < self.retry_policy.max_retries => {
                    let delay = self.retry_policy.backoff_for(attempt);
                    attempt += 1;
                    tracing::warn!(
                        error = %e,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Transient upstream failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }
}
