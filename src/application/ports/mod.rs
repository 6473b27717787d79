mod llm_client;
mod proxy_client;
mod text_extractor;

pub use llm_client::{LlmClient, LlmClientError};
pub use proxy_client::{ProxyClient, ProxyError};
pub use text_extractor::{TextExtractor, TextExtractorError};
