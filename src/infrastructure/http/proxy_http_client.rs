use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{ProxyClient, ProxyError};
use crate::domain::{Action, ProxyRequest, ProxyResponse};
use crate::infrastructure::observability::sanitize_prompt;

/// Talks to the proxy endpoint over HTTP. One POST per call, no retries.
pub struct HttpProxyClient {
    client: Client,
    endpoint: String,
}

impl HttpProxyClient {
    pub fn new(endpoint: &str) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl ProxyClient for HttpProxyClient {
    #[tracing::instrument(skip(self, prompt), fields(endpoint = %self.endpoint))]
    async fn call(&self, prompt: &str, action: Action) -> Result<String, ProxyError> {
        tracing::debug!(prompt = %sanitize_prompt(prompt), "Calling proxy");

        let request = ProxyRequest::new(prompt, action);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProxyError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Proxy returned an error status");
            return Err(ProxyError::Status(status.as_u16()));
        }

        let body: ProxyResponse = response
            .json()
            .await
            .map_err(|e| ProxyError::InvalidBody(e.to_string()))?;

        body.into_result().map_err(ProxyError::InvalidBody)
    }
}
