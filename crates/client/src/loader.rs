//! Cache-aware document loading.
//!
//! The loader is the single path every tool takes to get at a document:
//! classify the source, consult the cache, otherwise fetch + parse and
//! cache the result. Failed loads are never cached, so a later retry can
//! succeed once the resource becomes available or valid.

use std::sync::Arc;

use folio_core::{DocumentCache, DocumentContent, Error};

use crate::fetch::{FetchClient, Source};
use crate::parse::parse_document_bytes;

/// A document resolved through the loader.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Canonical source identifier (absolute path or verbatim URL).
    pub source: String,
    pub content: Arc<DocumentContent>,
}

/// Fetches, parses, and caches documents by source identifier.
#[derive(Clone)]
pub struct DocumentLoader {
    fetcher: FetchClient,
    cache: Arc<DocumentCache>,
}

impl DocumentLoader {
    pub fn new(fetcher: FetchClient, cache: Arc<DocumentCache>) -> Self {
        Self { fetcher, cache }
    }

    /// The cache this loader reads and writes.
    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    /// Resolve a path or URL to its parsed document.
    ///
    /// A cache hit performs no fetch and no parse. Concurrent loads of the
    /// same uncached identifier may each do the work; the last insert wins,
    /// which is harmless since the result is deterministic for given bytes.
    pub async fn load(&self, path: &str) -> Result<LoadedDocument, Error> {
        let source = Source::classify(path)?;
        let key = source.identifier().to_string();

        if let Some(content) = self.cache.get(&key) {
            tracing::debug!("cache hit for {key}");
            return Ok(LoadedDocument { source: key, content });
        }

        let bytes = self.fetcher.fetch(&source).await?;
        let content = parse_document_bytes(bytes).await?;
        let content = self.cache.insert(key.clone(), content);
        tracing::debug!("loaded and cached {key}");

        Ok(LoadedDocument { source: key, content })
    }
}
