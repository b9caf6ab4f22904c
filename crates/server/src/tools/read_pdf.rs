//! read_pdf tool implementation.
//!
//! Returns the full extracted text of a document along with its metadata.

use folio_client::DocumentLoader;
use folio_core::{DocumentMetadata, Error};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for read_pdf tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadPdfParams {
    /// Local file path or http(s) URL of the PDF.
    pub path: String,
}

/// Output structure for read_pdf tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadPdfOutput {
    /// Resolved source identifier (absolute path or URL).
    pub source: String,
    /// Full extracted text, line breaks preserved.
    pub text: String,
    pub metadata: DocumentMetadata,
}

/// Implementation of the read_pdf tool.
pub async fn read_pdf_impl(loader: &DocumentLoader, params: ReadPdfParams) -> Result<CallToolResult, McpError> {
    if params.path.is_empty() {
        return Err(Error::InvalidArgument("path cannot be empty".into()).into());
    }

    let doc = loader.load(&params.path).await?;

    let output = ReadPdfOutput {
        source: doc.source,
        text: doc.content.full_text.clone(),
        metadata: doc.content.metadata.clone(),
    };

    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{result_json, temp_pdf, test_loader};

    #[tokio::test]
    async fn test_read_pdf_empty_path() {
        let loader = test_loader();
        let result = read_pdf_impl(&loader, ReadPdfParams { path: String::new() }).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_read_pdf_returns_text_and_metadata() {
        let (_dir, path) = temp_pdf(&["First line", "Second line"]);
        let loader = test_loader();

        let result = read_pdf_impl(&loader, ReadPdfParams { path: path.clone() }).await.unwrap();
        let value = result_json(&result);

        assert_eq!(value["source"], path);
        assert!(value["text"].as_str().unwrap().contains("First line"));
        assert_eq!(value["metadata"]["pageCount"], 1);
        assert_eq!(value["metadata"]["title"], "Sample Document");
    }

    #[tokio::test]
    async fn test_read_pdf_missing_file() {
        let loader = test_loader();
        let result = read_pdf_impl(&loader, ReadPdfParams { path: "/no/such.pdf".into() }).await;
        assert!(result.is_err());
    }
}
