use async_trait::async_trait;

use crate::domain::Action;

/// Client side of the proxy contract.
#[async_trait]
pub trait ProxyClient: Send + Sync {
    /// Returns the raw model text, or an error. Never a partial result.
    async fn call(&self, prompt: &str, action: Action) -> Result<String, ProxyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("proxy request failed with status {0}")]
    Status(u16),
    #[error("could not reach the proxy: {0}")]
    Transport(String),
    #[error("invalid proxy response: {0}")]
    InvalidBody(String),
}
