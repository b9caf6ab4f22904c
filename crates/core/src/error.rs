//! Unified error types for mcp-pdf.
//!
//! Every component returns these; they are converted to a textual error
//! payload only at the tool dispatch boundary.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error types for the mcp-pdf server.
///
/// Display messages are surfaced verbatim to the calling host as
/// `"Error: <message>"`, so they are written as plain sentences.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid tool arguments (wrong shape or value).
    #[error("Invalid arguments: {0}")]
    InvalidArgument(String),

    /// Unrecognized tool name.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Local file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Local file read failed for a reason other than absence.
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// Source string looked like a URL but did not parse as one.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP response carried a non-success, non-redirect status.
    #[error("Download failed with HTTP status {0}")]
    DownloadFailed(u16),

    /// Redirect response without a Location header.
    #[error("Redirect response missing Location header")]
    MissingLocation,

    /// Redirect chain exceeded the configured hop cap.
    #[error("Too many redirects (limit: {0})")]
    TooManyRedirects(usize),

    /// Network-level transport failure.
    #[error("Request failed: {0}")]
    Http(String),

    /// The PDF parser rejected the document bytes.
    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    /// Parser-reported metadata unusable for segmentation (zero pages).
    #[error("Invalid document metadata: {0}")]
    InvalidMetadata(String),

    /// No page selector supplied where one is required.
    #[error("Missing argument: {0}")]
    MissingArgument(String),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidArgument(_) | Error::MissingArgument(_) => -32602,
            Error::UnknownTool(_) => -32601,
            Error::FileNotFound(_) => -32001,
            Error::FileRead { .. } => -32002,
            Error::InvalidUrl(_) => -32003,
            Error::DownloadFailed(_) => -32004,
            Error::MissingLocation => -32005,
            Error::TooManyRedirects(_) => -32006,
            Error::Http(_) => -32007,
            Error::Parse(_) => -32008,
            Error::InvalidMetadata(_) => -32009,
        };

        McpError { code: ErrorCode(code), message: err.to_string().into(), data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tool_display() {
        let err = Error::UnknownTool("delete_pdf".to_string());
        assert_eq!(err.to_string(), "Unknown tool: delete_pdf");
    }

    #[test]
    fn test_download_failed_display() {
        let err = Error::DownloadFailed(404);
        assert_eq!(err.to_string(), "Download failed with HTTP status 404");
    }

    #[test]
    fn test_error_to_mcp_error() {
        let err = Error::MissingArgument("page or startPage/endPage".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code.0, -32602);
        assert!(mcp_err.message.contains("Missing argument"));
    }

    #[test]
    fn test_file_read_keeps_io_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::FileRead { path: "/tmp/x.pdf".into(), source: io };
        assert!(err.to_string().contains("/tmp/x.pdf"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
