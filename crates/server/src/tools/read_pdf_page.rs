//! read_pdf_page tool implementation.
//!
//! Serves a single page or a page range, sliced from the extracted text by
//! the line-count heuristic. The slice is approximate: true page breaks are
//! not recoverable from extracted plain text.

use folio_client::DocumentLoader;
use folio_core::{Error, PageSelector, page};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for read_pdf_page tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadPdfPageParams {
    /// Local file path or http(s) URL of the PDF.
    pub path: String,

    /// 1-based page to read. Wins over startPage/endPage when both given.
    #[serde(default)]
    pub page: Option<u32>,

    /// First page of a range (1-based, inclusive). Requires endPage.
    #[serde(default)]
    pub start_page: Option<u32>,

    /// Last page of a range (1-based, inclusive). Requires startPage.
    #[serde(default)]
    pub end_page: Option<u32>,
}

/// Requested page range, echoed back in the output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageRange {
    pub start_page: u32,
    pub end_page: u32,
}

/// Output structure for read_pdf_page tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadPdfPageOutput {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_range: Option<PageRange>,
    /// Approximate page text; empty for out-of-range requests.
    pub text: String,
    pub total_pages: u32,
}

/// Implementation of the read_pdf_page tool.
pub async fn read_pdf_page_impl(
    loader: &DocumentLoader, params: ReadPdfPageParams,
) -> Result<CallToolResult, McpError> {
    if params.path.is_empty() {
        return Err(Error::InvalidArgument("path cannot be empty".into()).into());
    }

    let selector = PageSelector::from_args(params.page, params.start_page, params.end_page)?;
    let doc = loader.load(&params.path).await?;

    let text = page::slice_pages(&doc.content.full_text, doc.content.metadata.page_count, selector)?;

    let (requested_page, requested_range) = match selector {
        PageSelector::Single(page) => (Some(page), None),
        PageSelector::Range { start, end } => (None, Some(PageRange { start_page: start, end_page: end })),
    };

    let output = ReadPdfPageOutput {
        path: params.path,
        requested_page,
        requested_range,
        text,
        total_pages: doc.content.metadata.page_count,
    };

    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}
