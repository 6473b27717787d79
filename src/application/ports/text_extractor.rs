use async_trait::async_trait;

use crate::domain::{PageText, UploadedFile};

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_pages(
        &self,
        file: &UploadedFile,
    ) -> Result<Vec<PageText>, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text found in {0}")]
    NoTextFound(String),
}
