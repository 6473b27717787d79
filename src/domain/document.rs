const PAGE_SEPARATOR: &str = "\n\n";

/// Text of one uploaded document, held only for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub raw_text: String,
}

/// Text extracted from a single page. Page numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub page_number: u32,
    pub text: String,
}

impl PageText {
    pub fn new(page_number: u32, text: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
        }
    }
}

impl Document {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }

    /// Joins pages in page-number order with a blank line between them,
    /// whatever order the extractor produced them in.
    pub fn from_pages(mut pages: Vec<PageText>) -> Self {
        pages.sort_by_key(|p| p.page_number);

        let joined = pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(PAGE_SEPARATOR);

        Self {
            raw_text: joined.trim().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw_text.trim().is_empty()
    }
}
