//! # Application State
//!
//! Core shell state. This module contains domain logic only, no terminal
//! types. Presentation state (scroll offsets, input buffer, banner index,
//! the active notice) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── fetcher: Arc<dyn PageFetcher>   // where page documents come from
//! ├── store: FragmentStore            // session cache, insertion-ordered
//! ├── nav: Vec<NavEntry>              // key -> display name, parsed at startup
//! ├── location: Option<String>        // address fragment; None = home
//! ├── active_page: String             // highlighted nav entry
//! ├── view: View                      // what the content region shows
//! ├── is_loading: bool                // a fetch or pre-cache is in flight
//! └── status_message: String          // status bar text
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use std::sync::Arc;

use crate::content::{Fragment, FragmentStore, NavEntry, PageFetcher};
use crate::core::search::SearchHit;

/// The distinguished page that is cached at startup and never fetched.
pub const HOME_KEY: &str = "home";

/// What the content region currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// A cached page fragment, by key.
    Page(String),
    /// The error panel shown when a single-page load fails.
    LoadFailed,
    /// Search results (possibly empty; an empty list renders the
    /// no-results placeholder, not a blank region).
    SearchResults { query: String, hits: Vec<SearchHit> },
}

pub struct App {
    pub fetcher: Arc<dyn PageFetcher>,
    pub store: FragmentStore,
    pub nav: Vec<NavEntry>,
    /// The address-bar fragment identifier; `None` means home.
    pub location: Option<String>,
    pub active_page: String,
    pub view: View,
    pub is_loading: bool,
    pub status_message: String,
}

impl App {
    /// Build the shell around a parsed entry document. The home fragment is
    /// cached immediately, so it is present before any navigation happens.
    pub fn new(fetcher: Arc<dyn PageFetcher>, home: Fragment, nav: Vec<NavEntry>) -> Self {
        let mut store = FragmentStore::new();
        store.insert(HOME_KEY.to_string(), home);
        Self {
            fetcher,
            store,
            nav,
            location: None,
            active_page: HOME_KEY.to_string(),
            view: View::Page(HOME_KEY.to_string()),
            is_loading: false,
            status_message: String::new(),
        }
    }

    /// Display name for a page key, falling back to the raw key.
    pub fn page_title<'a>(&'a self, key: &'a str) -> &'a str {
        self.nav
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.name.as_str())
            .unwrap_or(key)
    }

    /// Keys of every navigable page except home, the set the bulk
    /// pre-cache walks before a search.
    pub fn page_keys(&self) -> Vec<String> {
        self.nav
            .iter()
            .filter(|entry| entry.key != HOME_KEY)
            .map(|entry| entry.key.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::state::{HOME_KEY, View};
    use crate::test_support::test_app;

    #[test]
    fn new_app_has_home_cached_and_rendered() {
        let app = test_app();
        assert!(app.store.contains(HOME_KEY));
        assert_eq!(app.view, View::Page(HOME_KEY.to_string()));
        assert_eq!(app.active_page, HOME_KEY);
        assert!(app.location.is_none());
        assert!(!app.is_loading);
    }

    #[test]
    fn page_title_falls_back_to_key() {
        let app = test_app();
        assert_eq!(app.page_title("about"), "About Us");
        assert_eq!(app.page_title("mystery"), "mystery");
    }

    #[test]
    fn page_keys_exclude_home() {
        let app = test_app();
        assert_eq!(app.page_keys(), ["about", "join"]);
    }
}
