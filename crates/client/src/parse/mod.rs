//! PDF parsing.
//!
//! Text extraction is delegated to `pdf-extract`; page count and the Info
//! dictionary come from `lopdf`. Both read the same in-memory byte buffer.

mod info;

use bytes::Bytes;
use folio_core::{DocumentContent, DocumentMetadata, Error};
use lopdf::Document;

/// Parse document bytes into extracted text plus metadata.
///
/// Line breaks in the extracted text are preserved as the extractor
/// produced them. Any parser failure is reported as [`Error::Parse`]; the
/// caller must not cache the identifier in that case.
pub fn parse_document(bytes: &[u8]) -> Result<DocumentContent, Error> {
    let full_text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| Error::Parse(e.to_string()))?;

    let doc = Document::load_mem(bytes).map_err(|e| Error::Parse(e.to_string()))?;
    let page_count = doc.get_pages().len() as u32;
    let (title, author, created_at) = info::document_info(&doc);

    Ok(DocumentContent {
        full_text,
        metadata: DocumentMetadata { title, author, page_count, created_at },
    })
}

/// Async wrapper: `pdf-extract` is synchronous, so parsing runs on a
/// blocking thread.
pub async fn parse_document_bytes(bytes: Bytes) -> Result<DocumentContent, Error> {
    tokio::task::spawn_blocking(move || parse_document(&bytes))
        .await
        .map_err(|e| Error::Parse(format!("parser task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_pdf;
    use chrono::Datelike;

    #[test]
    fn test_parse_extracts_text_and_metadata() {
        let bytes = sample_pdf(&["Hello World", "Second line"]);
        let content = parse_document(&bytes).unwrap();

        assert!(content.full_text.contains("Hello World"));
        assert!(content.full_text.contains("Second line"));
        assert_eq!(content.metadata.page_count, 1);
        assert_eq!(content.metadata.title.as_deref(), Some("Sample Document"));
        assert_eq!(content.metadata.author.as_deref(), Some("Folio Tests"));
        assert_eq!(content.metadata.created_at.unwrap().year(), 2024);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = parse_document(b"this is not a pdf at all");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[tokio::test]
    async fn test_parse_bytes_async() {
        let bytes = Bytes::from(sample_pdf(&["Async page"]));
        let content = parse_document_bytes(bytes).await.unwrap();
        assert!(content.full_text.contains("Async page"));
    }
}
