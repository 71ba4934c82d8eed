//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::content::{Fragment, PageFetcher, PageLoadError};
use crate::core::state::App;

/// An in-memory fetcher serving canned documents. Missing pages answer 404,
/// and every page request is counted so tests can assert on network traffic.
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    index: String,
    request_counts: HashMap<String, AtomicUsize>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            index: String::new(),
            request_counts: HashMap::new(),
        }
    }

    pub fn with_page(mut self, key: &str, html: &str) -> Self {
        self.pages.insert(key.to_string(), html.to_string());
        self.request_counts
            .insert(key.to_string(), AtomicUsize::new(0));
        self
    }

    pub fn with_index(mut self, html: &str) -> Self {
        self.index = html.to_string();
        self
    }

    /// How many times `fetch_page` was called for `key`.
    pub fn page_requests(&self, key: &str) -> usize {
        self.request_counts
            .get(key)
            .map(|count| count.load(Ordering::SeqCst))
            .unwrap_or(0)
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_page(&self, key: &str) -> Result<String, PageLoadError> {
        if let Some(count) = self.request_counts.get(key) {
            count.fetch_add(1, Ordering::SeqCst);
        }
        self.pages
            .get(key)
            .cloned()
            .ok_or(PageLoadError::Http { status: 404 })
    }

    async fn fetch_index(&self) -> Result<String, PageLoadError> {
        Ok(self.index.clone())
    }
}

/// A fragment with the given text as its only paragraph.
pub fn test_fragment(text: &str) -> Fragment {
    Fragment::from_markup(format!("<p>{text}</p>"))
}

/// A small three-page shell: cached home plus `about` and `join` nav links.
pub fn test_app() -> App {
    use crate::content::NavEntry;

    let nav = vec![
        NavEntry { key: "home".to_string(), name: "Home".to_string() },
        NavEntry { key: "about".to_string(), name: "About Us".to_string() },
        NavEntry { key: "join".to_string(), name: "Join".to_string() },
    ];
    App::new(
        Arc::new(StaticFetcher::new()),
        test_fragment("Hello home body"),
        nav,
    )
}
