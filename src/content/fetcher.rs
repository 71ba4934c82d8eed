use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while fetching or assembling a page fragment.
/// This is the only user-facing error path: single-page navigation surfaces
/// it as an error panel, bulk pre-caching swallows it per page.
#[derive(Debug)]
pub enum PageLoadError {
    /// Transport-level failure (DNS, refused connection, unreadable file).
    Network(String),
    /// The server answered with a non-success status.
    Http { status: u16 },
    /// Extraction produced no renderable content.
    Empty,
    /// The document is missing structure the shell depends on.
    Parse(String),
}

impl fmt::Display for PageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLoadError::Network(msg) => write!(f, "network error: {msg}"),
            PageLoadError::Http { status } => write!(f, "unexpected status (HTTP {status})"),
            PageLoadError::Empty => write!(f, "page has no renderable content"),
            PageLoadError::Parse(msg) => write!(f, "malformed document: {msg}"),
        }
    }
}

impl std::error::Error for PageLoadError {}

/// Source of raw page documents.
///
/// The shell never talks to a transport directly; everything goes through
/// this seam so the loader, router and search engine can be exercised against
/// an in-memory fetcher in tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the name of the fetcher (for logs).
    fn name(&self) -> &str;

    /// Fetch the raw document for the page resource `pages/<key>.html`.
    async fn fetch_page(&self, key: &str) -> Result<String, PageLoadError>;

    /// Fetch the site's entry document (home content, nav list, banner slides).
    async fn fetch_index(&self) -> Result<String, PageLoadError>;
}
