use legalyze::domain::{Document, PDF_MIME, PageText, UploadedFile};

#[test]
fn given_pages_out_of_order_when_building_document_then_joins_in_page_order() {
    let pages = vec![
        PageText::new(3, "third"),
        PageText::new(1, "first"),
        PageText::new(2, "second"),
    ];

    let document = Document::from_pages(pages);

    assert_eq!(document.raw_text, "first\n\nsecond\n\nthird");
}

#[test]
fn given_padded_pages_when_building_document_then_trims_outer_whitespace() {
    let pages = vec![PageText::new(1, "  lease  "), PageText::new(2, "terms\n")];

    let document = Document::from_pages(pages);

    assert_eq!(document.raw_text, "lease  \n\nterms");
}

#[test]
fn given_no_pages_when_building_document_then_document_is_empty() {
    let document = Document::from_pages(Vec::new());

    assert!(document.is_empty());
}

#[test]
fn given_pdf_mime_when_checking_upload_then_is_pdf() {
    let file = UploadedFile::new("lease.pdf", PDF_MIME, Vec::new());
    assert!(file.is_pdf());
}

#[test]
fn given_pdf_mime_with_parameters_when_checking_upload_then_is_pdf() {
    let file = UploadedFile::new("lease.pdf", "Application/PDF; name=lease.pdf", Vec::new());
    assert!(file.is_pdf());
}

#[test]
fn given_other_mime_when_checking_upload_then_is_not_pdf() {
    for mime in ["text/plain", "image/png", "application/pdfx", ""] {
        let file = UploadedFile::new("lease", mime, Vec::new());
        assert!(!file.is_pdf(), "{mime} accepted as PDF");
    }
}
