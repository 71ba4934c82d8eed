//! Directory fetcher: the same resource layout as [`HttpFetcher`], read from
//! a local site folder instead of a server. Lets the shell open an unserved
//! static site straight from disk.
//!
//! [`HttpFetcher`]: super::HttpFetcher

use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;

use crate::content::fetcher::{PageFetcher, PageLoadError};

pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    async fn read(&self, relative: &str) -> Result<String, PageLoadError> {
        let path = self.root.join(relative);
        debug!("read {}", path.display());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| PageLoadError::Network(format!("{}: {}", path.display(), e)))
    }
}

#[async_trait]
impl PageFetcher for DirFetcher {
    fn name(&self) -> &str {
        "dir"
    }

    async fn fetch_page(&self, key: &str) -> Result<String, PageLoadError> {
        self.read(&format!("pages/{key}.html")).await
    }

    async fn fetch_index(&self) -> Result<String, PageLoadError> {
        self.read("index.html").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_a_network_error() {
        let fetcher = DirFetcher::new(PathBuf::from("/nonexistent-site-root"));
        let result = fetcher.fetch_page("about").await;
        assert!(matches!(result, Err(PageLoadError::Network(_))));
    }
}
