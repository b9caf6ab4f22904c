//! Document byte fetching.
//!
//! ### URL sources
//! - GET with redirects handled manually: only 301/302 are followed (via the
//!   `Location` header, relative targets resolved against the current URL),
//!   and only 200/202 are accepted as success.
//! - Redirect chains are capped at `max_redirects` hops.
//! - The full response body is accumulated into one byte buffer.
//!
//! ### Path sources
//! - The absolute path is read fully; a missing file is reported as such,
//!   any other I/O failure carries the underlying error.

pub mod source;

use std::time::{Duration, Instant};

use bytes::Bytes;
use folio_core::Error;
use reqwest::{Client, Url, header};

pub use source::{Source, SourceKind};

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: "mcp-pdf/0.1")
    pub user_agent: String,

    /// Request timeout (default: 20s)
    pub timeout: Duration,

    /// Maximum number of redirect hops to follow (default: 10)
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "mcp-pdf/0.1".to_string(),
            timeout: Duration::from_millis(20_000),
            max_redirects: 10,
        }
    }
}

impl FetchConfig {
    /// Build from the application configuration.
    pub fn from_app(config: &folio_core::AppConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
            max_redirects: config.max_redirects,
        }
    }
}

/// Fetches raw document bytes from a URL or the local filesystem.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: Client,
    config: FetchConfig,
}

impl FetchClient {
    /// Create a new fetch client with the given configuration.
    ///
    /// Redirect handling is disabled on the underlying HTTP client; the
    /// fetch loop below follows redirects itself so that only 301/302 count.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetch the raw bytes behind a classified source.
    pub async fn fetch(&self, source: &Source) -> Result<Bytes, Error> {
        match source.kind() {
            SourceKind::Remote(url) => self.fetch_url(url.clone()).await,
            SourceKind::Local(path) => {
                let path_text = source.identifier().to_string();
                match tokio::fs::read(path).await {
                    Ok(bytes) => Ok(Bytes::from(bytes)),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::FileNotFound(path_text)),
                    Err(e) => Err(Error::FileRead { path: path_text, source: e }),
                }
            }
        }
    }

    /// Issue GETs, following 301/302 up to the configured hop cap.
    async fn fetch_url(&self, url: Url) -> Result<Bytes, Error> {
        let start = Instant::now();
        let mut current = url;

        for _ in 0..=self.config.max_redirects {
            let response = self
                .http
                .get(current.clone())
                .send()
                .await
                .map_err(|e| Error::Http(format!("network error: {e}")))?;

            let status = response.status();
            match status.as_u16() {
                301 | 302 => {
                    let location = response
                        .headers()
                        .get(header::LOCATION)
                        .and_then(|v| v.to_str().ok())
                        .ok_or(Error::MissingLocation)?;

                    let next = current
                        .join(location)
                        .map_err(|e| Error::InvalidUrl(format!("{location}: {e}")))?;
                    tracing::debug!("redirect {} -> {}", current, next);
                    current = next;
                }
                200 | 202 => {
                    let bytes = response
                        .bytes()
                        .await
                        .map_err(|e| Error::Http(format!("failed to read response body: {e}")))?;

                    tracing::debug!(
                        "fetched {} in {}ms ({} bytes)",
                        current,
                        start.elapsed().as_millis(),
                        bytes.len()
                    );
                    return Ok(bytes);
                }
                code => return Err(Error::DownloadFailed(code)),
            }
        }

        Err(Error::TooManyRedirects(self.config.max_redirects))
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}
