//! get_pdf_metadata tool implementation.
//!
//! Metadata-only view of a document. Loading still extracts the full text
//! (the cache entry is shared with the other tools), so a later read_pdf of
//! the same source is a pure cache hit.

use folio_client::DocumentLoader;
use folio_core::{DocumentMetadata, Error};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for get_pdf_metadata tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPdfMetadataParams {
    /// Local file path or http(s) URL of the PDF.
    pub path: String,
}

/// Output structure for get_pdf_metadata tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPdfMetadataOutput {
    pub path: String,
    pub metadata: DocumentMetadata,
}

/// Implementation of the get_pdf_metadata tool.
pub async fn get_pdf_metadata_impl(
    loader: &DocumentLoader, params: GetPdfMetadataParams,
) -> Result<CallToolResult, McpError> {
    if params.path.is_empty() {
        return Err(Error::InvalidArgument("path cannot be empty".into()).into());
    }

    let doc = loader.load(&params.path).await?;

    let output = GetPdfMetadataOutput { path: params.path, metadata: doc.content.metadata.clone() };

    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}
