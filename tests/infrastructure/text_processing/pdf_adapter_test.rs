use std::time::Duration;

use legalyze::application::ports::{TextExtractor, TextExtractorError};
use legalyze::domain::{Document, PDF_MIME, UploadedFile};
use legalyze::infrastructure::text_processing::{PdfAdapter, normalize_page_text};

#[test]
fn given_layout_spacing_when_normalizing_then_collapses_runs() {
    let raw = "LEASE   AGREEMENT\n\n\tRent:  20,000  \n   \nTerm: 11 months";

    assert_eq!(
        normalize_page_text(raw),
        "LEASE AGREEMENT\nRent: 20,000\nTerm: 11 months"
    );
}

#[test]
fn given_blank_page_when_normalizing_then_empty() {
    assert_eq!(normalize_page_text(" \n\t\n "), "");
}

#[tokio::test]
async fn given_non_pdf_content_type_when_extracting_then_unsupported() {
    let adapter = PdfAdapter::default();
    let file = UploadedFile::new("notes.txt", "text/plain", b"hello".to_vec());

    let err = adapter.extract_pages(&file).await.unwrap_err();

    assert!(matches!(err, TextExtractorError::UnsupportedContentType(ct) if ct == "text/plain"));
}

#[tokio::test]
async fn given_corrupt_pdf_bytes_when_extracting_then_fails_without_panicking() {
    let adapter = PdfAdapter::new(Duration::from_secs(5));
    let file = UploadedFile::new("broken.pdf", PDF_MIME, b"definitely not a pdf".to_vec());

    let err = adapter.extract_pages(&file).await.unwrap_err();

    assert!(matches!(
        err,
        TextExtractorError::ExtractionFailed(_) | TextExtractorError::NoTextFound(_)
    ));
}

#[tokio::test]
async fn given_multi_page_pdf_when_extracting_then_returns_pages_in_order_skipping_blank_ones() {
    let adapter = PdfAdapter::default();
    let file = UploadedFile::new(
        "lease_three_pages.pdf",
        PDF_MIME,
        include_bytes!("../../fixtures/lease_three_pages.pdf").to_vec(),
    );

    let pages = adapter.extract_pages(&file).await.unwrap();

    let numbers: Vec<u32> = pages.iter().map(|p| p.page_number).collect();
    assert_eq!(numbers, vec![1, 3]);
    assert!(pages[0].text.contains("Residential Lease Agreement"));
    assert!(pages[1].text.contains("Monthly rent is 20000 rupees"));
}

#[tokio::test]
async fn given_multi_page_pdf_when_building_document_then_text_follows_page_order() {
    let adapter = PdfAdapter::default();
    let file = UploadedFile::new(
        "lease_three_pages.pdf",
        PDF_MIME,
        include_bytes!("../../fixtures/lease_three_pages.pdf").to_vec(),
    );

    let document = Document::from_pages(adapter.extract_pages(&file).await.unwrap());

    let title = document.raw_text.find("Residential Lease Agreement").unwrap();
    let rent = document.raw_text.find("Monthly rent").unwrap();
    assert!(title < rent);
    assert!(document.raw_text.contains("\n\n"));
}

#[tokio::test]
async fn given_pdf_without_text_when_extracting_then_returns_no_text_found() {
    let adapter = PdfAdapter::default();
    let file = UploadedFile::new(
        "blank.pdf",
        PDF_MIME,
        include_bytes!("../../fixtures/blank.pdf").to_vec(),
    );

    let err = adapter.extract_pages(&file).await.unwrap_err();

    assert!(matches!(err, TextExtractorError::NoTextFound(name) if name == "blank.pdf"));
}
