//! In-memory document cache.
//!
//! Maps a source identifier (absolute path or URL, verbatim) to its parsed
//! document. Unbounded, process-lifetime, no eviction and no invalidation:
//! once an identifier is cached, every later read returns the same content
//! even if the underlying resource has changed.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::document::DocumentContent;

/// Process-lifetime cache of parsed documents.
///
/// Owned by the server instance; there is no ambient singleton. Concurrent
/// loads of the same uncached identifier may each parse the document, with
/// the last insert winning. That is acceptable: all fields are deterministic
/// given the same bytes.
#[derive(Debug, Default)]
pub struct DocumentCache {
    entries: RwLock<HashMap<String, Arc<DocumentContent>>>,
}

impl DocumentCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously cached document.
    pub fn get(&self, key: &str) -> Option<Arc<DocumentContent>> {
        self.read_entries().get(key).cloned()
    }

    /// Store a parsed document and return the shared handle.
    ///
    /// Overwrites any existing entry for the key (last write wins).
    pub fn insert(&self, key: String, content: DocumentContent) -> Arc<DocumentContent> {
        let content = Arc::new(content);
        self.write_entries().insert(key, Arc::clone(&content));
        content
    }

    /// Whether an identifier has been cached.
    pub fn contains(&self, key: &str) -> bool {
        self.read_entries().contains_key(key)
    }

    /// Number of cached documents.
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_entries(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Arc<DocumentContent>>> {
        self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_entries(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Arc<DocumentContent>>> {
        self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
