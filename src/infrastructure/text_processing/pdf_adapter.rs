use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::{PageText, UploadedFile};

const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts page text with pdf_oxide. Parsing runs on the blocking pool and is
/// bounded by a timeout.
pub struct PdfAdapter {
    timeout: Duration,
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTRACTION_TIMEOUT)
    }
}

impl PdfAdapter {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn extract_pages(path: &Path) -> Result<Vec<PageText>, TextExtractorError> {
        let mut doc = PdfDocument::open(path).map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to parse PDF: {e}"))
        })?;

        let page_count = doc.page_count().map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let raw = doc.extract_text(page_index).map_err(|e| {
                TextExtractorError::ExtractionFailed(format!(
                    "failed to extract page {}: {e}",
                    page_index + 1
                ))
            })?;

            let text = normalize_page_text(&raw);
            if !text.is_empty() {
                pages.push(PageText::new((page_index + 1) as u32, text));
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(
        skip(self, file),
        fields(filename = %file.filename, size_bytes = file.size_bytes())
    )]
    async fn extract_pages(
        &self,
        file: &UploadedFile,
    ) -> Result<Vec<PageText>, TextExtractorError> {
        if !file.is_pdf() {
            return Err(TextExtractorError::UnsupportedContentType(
                file.content_type.clone(),
            ));
        }

        let mut temp_file = tempfile::Builder::new()
            .suffix(".pdf")
            .tempfile()
            .map_err(|e| {
                TextExtractorError::ExtractionFailed(format!("failed to create temp file: {e}"))
            })?;

        temp_file.write_all(&file.data).map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        // The temp file stays alive in this scope until the blocking task finishes.
        let temp_path = temp_file.path().to_path_buf();

        let pages = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| TextExtractorError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        if pages.is_empty() {
            return Err(TextExtractorError::NoTextFound(file.filename.clone()));
        }

        Ok(pages)
    }
}

/// Collapses runs of spaces and tabs inside each line and drops blank lines,
/// so text items split by the PDF layout read as ordinary prose.
pub fn normalize_page_text(raw: &str) -> String {
    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
