//! HTTP fetcher: page fragments served from a site root over plain GET.
//!
//! Resource layout follows the site contract: the entry document lives at
//! `<base>/index.html` and every navigable page at `<base>/pages/<key>.html`.
//! No headers, no auth, no retries.

use async_trait::async_trait;
use log::{debug, warn};

use crate::content::fetcher::{PageFetcher, PageLoadError};

pub struct HttpFetcher {
    base_url: String,
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Creates a fetcher rooted at `base_url` (trailing slash optional).
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_text(&self, path: &str) -> Result<String, PageLoadError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PageLoadError::Network(e.to_string()))?;

        let status = response.status();
        debug!("{} -> {}", url, status);

        if !status.is_success() {
            warn!("fetch failed: {} answered {}", url, status);
            return Err(PageLoadError::Http {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| PageLoadError::Network(e.to_string()))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_page(&self, key: &str) -> Result<String, PageLoadError> {
        self.get_text(&format!("pages/{key}.html")).await
    }

    async fn fetch_index(&self) -> Result<String, PageLoadError> {
        self.get_text("index.html").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let fetcher = HttpFetcher::new("http://localhost:8000/".to_string());
        assert_eq!(fetcher.base_url, "http://localhost:8000");
        assert_eq!(fetcher.name(), "http");
    }
}
