//! search_pdf tool implementation.
//!
//! Linear substring search over the extracted text. Every match is
//! returned; there is no result limit.

use folio_client::DocumentLoader;
use folio_core::{Error, SearchMatch, search_lines};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for search_pdf tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchPdfParams {
    /// Local file path or http(s) URL of the PDF.
    pub path: String,

    /// Substring to look for.
    pub query: String,

    /// Match case exactly (default: false).
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Output structure for search_pdf tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchPdfOutput {
    pub path: String,
    pub query: String,
    pub matches: Vec<SearchMatch>,
    pub total_matches: usize,
}

/// Implementation of the search_pdf tool.
pub async fn search_pdf_impl(loader: &DocumentLoader, params: SearchPdfParams) -> Result<CallToolResult, McpError> {
    if params.path.is_empty() {
        return Err(Error::InvalidArgument("path cannot be empty".into()).into());
    }

    let doc = loader.load(&params.path).await?;
    let matches = search_lines(&doc.content.full_text, &params.query, params.case_sensitive);
    let total_matches = matches.len();

    let output = SearchPdfOutput { path: params.path, query: params.query, matches, total_matches };

    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}
