//! Source identifier classification.
//!
//! A source string is a URL when it starts with `http://` or `https://`,
//! and a filesystem path otherwise. The identifier doubles as the cache
//! key, so URLs are kept verbatim (no normalization) and paths are resolved
//! to absolute form only.

use std::path::{Path, PathBuf};

use folio_core::Error;
use url::Url;

/// A classified document source.
#[derive(Debug, Clone)]
pub struct Source {
    identifier: String,
    kind: SourceKind,
}

#[derive(Debug, Clone)]
pub enum SourceKind {
    Remote(Url),
    Local(PathBuf),
}

impl Source {
    /// Classify an input string as a URL or a filesystem path.
    pub fn classify(input: &str) -> Result<Self, Error> {
        if input.starts_with("http://") || input.starts_with("https://") {
            let url = Url::parse(input).map_err(|e| Error::InvalidUrl(format!("{input}: {e}")))?;
            return Ok(Self { identifier: input.to_string(), kind: SourceKind::Remote(url) });
        }

        let path = std::path::absolute(Path::new(input))
            .map_err(|source| Error::FileRead { path: input.to_string(), source })?;
        let identifier = path.display().to_string();
        Ok(Self { identifier, kind: SourceKind::Local(path) })
    }

    /// The cache key: the URL verbatim, or the absolute path.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn kind(&self) -> &SourceKind {
        &self.kind
    }
}
