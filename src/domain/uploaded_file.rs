pub const PDF_MIME: &str = "application/pdf";

/// A file handed to the orchestrator, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Matches on the MIME essence so `application/pdf; name=x.pdf` still counts.
    pub fn is_pdf(&self) -> bool {
        self.content_type
            .split(';')
            .next()
            .map(|essence| essence.trim().eq_ignore_ascii_case(PDF_MIME))
            .unwrap_or(false)
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}
