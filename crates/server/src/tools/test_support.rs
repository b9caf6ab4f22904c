//! Shared fixtures for tool tests: a loader with an empty cache, a scratch
//! PDF on disk, and a helper to read a tool result back as JSON.

use std::sync::Arc;

use folio_client::{DocumentLoader, FetchClient, FetchConfig};
use folio_core::DocumentCache;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use rmcp::model::CallToolResult;
use tempfile::TempDir;

pub(crate) fn test_loader() -> DocumentLoader {
    DocumentLoader::new(
        FetchClient::new(FetchConfig::default()).unwrap(),
        Arc::new(DocumentCache::new()),
    )
}

/// Parse the pretty-printed JSON text payload of a tool result.
pub(crate) fn result_json(result: &CallToolResult) -> serde_json::Value {
    let value = serde_json::to_value(result).unwrap();
    let text = value["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

/// Write a one-page PDF with the given text lines into a temp directory.
///
/// Returns the directory guard (dropping it deletes the file) and the path.
pub(crate) fn temp_pdf(lines: &[&str]) -> (TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.pdf");
    std::fs::write(&path, pdf_bytes(lines)).unwrap();
    let path = path.display().to_string();
    (dir, path)
}

fn pdf_bytes(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![50.into(), 750.into()]),
    ];
    for line in lines {
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("Td", vec![0.into(), (-16).into()]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Sample Document"),
        "Author" => Object::string_literal("Folio Tests"),
        "CreationDate" => Object::string_literal("D:20240315120000Z"),
    });
    doc.trailer.set("Info", info_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}
