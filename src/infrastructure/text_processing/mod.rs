mod pdf_adapter;

pub use pdf_adapter::{PdfAdapter, normalize_page_text};
