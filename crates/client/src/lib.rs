//! Client code for mcp-pdf.
//!
//! This crate provides source resolution, HTTP/file fetching, PDF parsing,
//! and the cache-aware document loader used by the server.

pub mod fetch;
pub mod loader;
pub mod parse;

pub use fetch::{FetchClient, FetchConfig, Source};
pub use loader::{DocumentLoader, LoadedDocument};
pub use parse::{parse_document, parse_document_bytes};

#[cfg(test)]
pub(crate) mod testutil;
