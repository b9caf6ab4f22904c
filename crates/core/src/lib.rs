//! Core types and shared functionality for mcp-pdf.
//!
//! This crate provides:
//! - In-memory document cache
//! - Document content and metadata types
//! - Page segmentation and text search
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod document;
pub mod error;
pub mod page;
pub mod search;

pub use cache::DocumentCache;
pub use config::AppConfig;
pub use document::{DocumentContent, DocumentMetadata};
pub use error::Error;
pub use page::PageSelector;
pub use search::{SearchMatch, search_lines};
