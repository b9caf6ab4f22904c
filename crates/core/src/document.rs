//! Parsed document content and metadata.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coarse document metadata reported by the PDF parser.
///
/// Immutable once produced; optional fields are omitted from serialized
/// output when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// Document title from the Info dictionary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document author from the Info dictionary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Parser-reported page count.
    pub page_count: u32,

    /// Creation timestamp from the Info dictionary, read as UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A fully loaded document: extracted text plus metadata.
///
/// Immutable once cached. Line breaks in `full_text` are preserved as the
/// extractor produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentContent {
    pub full_text: String,
    pub metadata: DocumentMetadata,
}
