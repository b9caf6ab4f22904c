//! MCP server handler implementation.
//!
//! This module defines the main server handler that routes tool calls to
//! the appropriate implementations. Every downstream failure is converted
//! at this boundary into a normal text response of the form
//! `"Error: <message>"` — the host distinguishes failure only by that text,
//! never by a protocol-level error.

use std::sync::Arc;

use folio_client::{DocumentLoader, FetchClient, FetchConfig};
use folio_core::{AppConfig, DocumentCache, Error};

use crate::tools::get_pdf_metadata::{GetPdfMetadataParams, get_pdf_metadata_impl};
use crate::tools::read_pdf::{ReadPdfParams, read_pdf_impl};
use crate::tools::read_pdf_page::{ReadPdfPageParams, read_pdf_page_impl};
use crate::tools::search_pdf::{SearchPdfParams, search_pdf_impl};

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult, PaginatedRequestParam,
        ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for mcp-pdf.
#[derive(Clone)]
pub struct McpPdfServer {
    loader: DocumentLoader,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl McpPdfServer {
    /// Create a new server handler owning its document cache.
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        let fetcher = FetchClient::new(FetchConfig::from_app(config))?;
        let loader = DocumentLoader::new(fetcher, Arc::new(DocumentCache::new()));
        Ok(Self { loader, tool_router: Self::tool_router() })
    }

    /// Read the full text of a PDF.
    #[tool(
        description = "Read the full extracted text and metadata of a PDF. Accepts a local file path or an http(s) URL."
    )]
    async fn read_pdf(&self, params: Parameters<ReadPdfParams>) -> Result<CallToolResult, McpError> {
        read_pdf_impl(&self.loader, params.0).await
    }

    /// Read an approximate page or page range of a PDF.
    #[tool(
        description = "Read a single page or a page range of a PDF. Page boundaries are approximated from the extracted text, so slices are close to but not exactly the printed pages."
    )]
    async fn read_pdf_page(&self, params: Parameters<ReadPdfPageParams>) -> Result<CallToolResult, McpError> {
        read_pdf_page_impl(&self.loader, params.0).await
    }

    /// Retrieve PDF document metadata.
    #[tool(description = "Get PDF metadata: title, author, page count, and creation date when present.")]
    async fn get_pdf_metadata(&self, params: Parameters<GetPdfMetadataParams>) -> Result<CallToolResult, McpError> {
        get_pdf_metadata_impl(&self.loader, params.0).await
    }

    /// Search a PDF for a text query.
    #[tool(
        description = "Search the extracted text of a PDF for a substring. Returns each matching line with one line of context on each side."
    )]
    async fn search_pdf(&self, params: Parameters<SearchPdfParams>) -> Result<CallToolResult, McpError> {
        search_pdf_impl(&self.loader, params.0).await
    }
}

/// Wrap an error message as a normal text response.
fn error_response(message: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {message}"))])
}

fn unrecognized_tool(name: &str) -> CallToolResult {
    error_response(&Error::UnknownTool(name.to_string()).to_string())
}

impl ServerHandler for McpPdfServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "mcp-pdf".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        if !self.tool_router.has_route(request.name.as_ref()) {
            return Ok(unrecognized_tool(request.name.as_ref()));
        }

        match self
            .tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
        {
            Ok(result) => Ok(result),
            Err(err) => Ok(error_response(&err.message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_text(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).unwrap();
        value["content"][0]["text"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_unknown_tool_response_text() {
        let result = unrecognized_tool("delete_pdf");
        let text = response_text(&result);
        assert!(text.starts_with("Error: Unknown tool"));
        assert!(text.contains("delete_pdf"));
    }

    #[test]
    fn test_error_response_is_not_protocol_failure() {
        let result = error_response("File not found: /tmp/x.pdf");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(response_text(&result), "Error: File not found: /tmp/x.pdf");
    }

    #[test]
    fn test_new_builds_with_defaults() {
        let handler = McpPdfServer::new(&AppConfig::default()).unwrap();
        assert!(handler.loader.cache().is_empty());
    }
}
