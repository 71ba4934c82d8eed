//! # Actions
//!
//! Everything that can happen in the shell becomes an [`Action`]: a nav
//! click, a submitted query, a fetch completing in the background. The
//! [`update`] function takes the current state and an action and mutates the
//! state, returning an [`Effect`]: a description of the I/O the caller must
//! perform (spawn a fetch, start the keyword-jump delay). No I/O happens
//! here, which is what makes the router and search flow testable without a
//! terminal or a network.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```

use log::{debug, warn};

use crate::content::{Fragment, PageLoadError};
use crate::core::search::{keyword_target, search_store};
use crate::core::state::{App, HOME_KEY, View};

#[derive(Debug)]
pub enum Action {
    /// Navigate to a page key ("home" or any nav key). Covers nav clicks,
    /// the startup navigation and search-result activation alike.
    Navigate(String),
    /// A background single-page load finished.
    PageLoaded { key: String, fragment: Fragment },
    /// A background single-page load failed.
    PageFailed { key: String, error: PageLoadError },
    /// The search form was submitted.
    Submit(String),
    /// The bulk pre-cache ahead of a search has settled.
    PreloadDone {
        query: String,
        fetched: Vec<(String, Fragment)>,
    },
    /// The fixed delay after a hidden-keyword hit has elapsed.
    KeywordJumpDue(String),
    Quit,
}

/// I/O the caller performs after an update.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn a single-page load for this key.
    LoadPage(String),
    /// Show the keyword notice, wait the fixed delay, then navigate.
    KeywordJump(String),
    /// Pre-cache every uncached navigable page, then deliver
    /// [`Action::PreloadDone`] with this query.
    PreloadAll(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(key) => navigate(app, &key),

        Action::PageLoaded { key, fragment } => {
            debug!("page '{}' loaded ({} chars of text)", key, fragment.text.len());
            app.store.insert(key.clone(), fragment);
            app.is_loading = false;
            app.status_message.clear();
            // Last write wins: a completion renders even when another
            // navigation superseded it mid-flight.
            app.view = View::Page(key.clone());
            app.active_page = key;
            Effect::None
        }

        Action::PageFailed { key, error } => {
            warn!("page '{}' failed to load: {}", key, error);
            app.is_loading = false;
            app.status_message.clear();
            app.view = View::LoadFailed;
            Effect::None
        }

        Action::Submit(raw) => {
            let query = raw.trim().to_string();
            if query.is_empty() {
                return Effect::None;
            }
            if let Some(target) = keyword_target(&query) {
                debug!("hidden keyword matched, jumping to '{}'", target);
                return Effect::KeywordJump(target.to_string());
            }
            app.is_loading = true;
            app.status_message = "Searching...".to_string();
            Effect::PreloadAll(query)
        }

        Action::PreloadDone { query, fetched } => {
            for (key, fragment) in fetched {
                app.store.insert(key, fragment);
            }
            app.is_loading = false;
            app.status_message.clear();
            let hits = search_store(&app.store, &app.nav, &query);
            debug!("search '{}' produced {} hit(s)", query, hits.len());
            app.view = View::SearchResults { query, hits };
            Effect::None
        }

        Action::KeywordJumpDue(target) => navigate(app, &target),

        Action::Quit => Effect::Quit,
    }
}

/// Router core. Home renders synchronously from the cache and clears the
/// location; any other key sets the location, then renders from cache or
/// kicks off a load.
fn navigate(app: &mut App, key: &str) -> Effect {
    if key == HOME_KEY {
        app.location = None;
        app.view = View::Page(HOME_KEY.to_string());
        app.active_page = HOME_KEY.to_string();
        return Effect::None;
    }

    app.location = Some(key.to_string());
    if app.store.contains(key) {
        app.view = View::Page(key.to_string());
        app.active_page = key.to_string();
        return Effect::None;
    }

    app.is_loading = true;
    app.status_message = format!("Loading {key}...");
    Effect::LoadPage(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_fragment};

    #[test]
    fn navigate_home_is_synchronous_and_clears_location() {
        let mut app = test_app();
        app.location = Some("about".to_string());
        app.view = View::LoadFailed;

        let effect = update(&mut app, Action::Navigate(HOME_KEY.to_string()));

        assert_eq!(effect, Effect::None);
        assert!(app.location.is_none());
        assert_eq!(app.view, View::Page(HOME_KEY.to_string()));
        assert_eq!(app.active_page, HOME_KEY);
    }

    #[test]
    fn navigate_uncached_page_spawns_a_load() {
        let mut app = test_app();

        let effect = update(&mut app, Action::Navigate("about".to_string()));

        assert_eq!(effect, Effect::LoadPage("about".to_string()));
        assert_eq!(app.location.as_deref(), Some("about"));
        assert!(app.is_loading);
    }

    #[test]
    fn navigate_cached_page_renders_without_a_load() {
        let mut app = test_app();
        app.store.insert("about".to_string(), test_fragment("cached"));

        let effect = update(&mut app, Action::Navigate("about".to_string()));

        assert_eq!(effect, Effect::None);
        assert_eq!(app.view, View::Page("about".to_string()));
        assert_eq!(app.active_page, "about");
        assert!(!app.is_loading);
    }

    #[test]
    fn page_loaded_caches_and_renders() {
        let mut app = test_app();
        update(&mut app, Action::Navigate("about".to_string()));

        let effect = update(
            &mut app,
            Action::PageLoaded {
                key: "about".to_string(),
                fragment: test_fragment("about body"),
            },
        );

        assert_eq!(effect, Effect::None);
        assert!(app.store.contains("about"));
        assert_eq!(app.view, View::Page("about".to_string()));
        assert!(!app.is_loading);

        // A repeat visit now renders straight from the cache.
        let effect = update(&mut app, Action::Navigate("about".to_string()));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn page_failed_shows_the_error_panel() {
        let mut app = test_app();
        update(&mut app, Action::Navigate("about".to_string()));

        let effect = update(
            &mut app,
            Action::PageFailed {
                key: "about".to_string(),
                error: PageLoadError::Http { status: 404 },
            },
        );

        assert_eq!(effect, Effect::None);
        assert_eq!(app.view, View::LoadFailed);
        assert!(!app.is_loading);
    }

    #[test]
    fn submit_blank_query_is_a_no_op() {
        let mut app = test_app();
        let before = app.view.clone();

        assert_eq!(update(&mut app, Action::Submit(String::new())), Effect::None);
        assert_eq!(update(&mut app, Action::Submit("   ".to_string())), Effect::None);
        assert_eq!(app.view, before);
        assert!(!app.is_loading);
    }

    #[test]
    fn submit_hidden_keyword_jumps_instead_of_searching() {
        let mut app = test_app();

        let effect = update(&mut app, Action::Submit("secret".to_string()));
        assert_eq!(effect, Effect::KeywordJump("join".to_string()));

        let effect = update(&mut app, Action::Submit("SECRET".to_string()));
        assert_eq!(effect, Effect::KeywordJump("join".to_string()));

        // The view is untouched until the delayed navigation fires.
        assert_eq!(app.view, View::Page(HOME_KEY.to_string()));
    }

    #[test]
    fn keyword_jump_due_performs_the_navigation() {
        let mut app = test_app();

        let effect = update(&mut app, Action::KeywordJumpDue("join".to_string()));
        assert_eq!(effect, Effect::LoadPage("join".to_string()));
        assert_eq!(app.location.as_deref(), Some("join"));

        // The home target takes the home special case.
        let effect = update(&mut app, Action::KeywordJumpDue(HOME_KEY.to_string()));
        assert_eq!(effect, Effect::None);
        assert!(app.location.is_none());
    }

    #[test]
    fn submit_plain_query_requests_a_preload() {
        let mut app = test_app();

        let effect = update(&mut app, Action::Submit("alpha".to_string()));
        assert_eq!(effect, Effect::PreloadAll("alpha".to_string()));
        assert!(app.is_loading);
    }

    #[test]
    fn preload_done_inserts_fragments_and_renders_hits() {
        let mut app = test_app();
        update(&mut app, Action::Submit("alpha".to_string()));

        let effect = update(
            &mut app,
            Action::PreloadDone {
                query: "alpha".to_string(),
                fetched: vec![
                    ("about".to_string(), test_fragment("alpha in about")),
                    ("join".to_string(), test_fragment("nothing")),
                ],
            },
        );

        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        match &app.view {
            View::SearchResults { query, hits } => {
                assert_eq!(query, "alpha");
                let keys: Vec<&str> = hits.iter().map(|h| h.key.as_str()).collect();
                // Home matched too ("alpha home" in the test fixture is absent,
                // so only the about page matches).
                assert_eq!(keys, ["about"]);
            }
            other => panic!("expected search results, got {:?}", other),
        }
    }

    #[test]
    fn preload_done_with_no_hits_renders_the_empty_result_view() {
        let mut app = test_app();
        update(&mut app, Action::Submit("zeta".to_string()));

        update(
            &mut app,
            Action::PreloadDone {
                query: "zeta".to_string(),
                fetched: Vec::new(),
            },
        );

        match &app.view {
            View::SearchResults { hits, .. } => assert!(hits.is_empty()),
            other => panic!("expected search results, got {:?}", other),
        }
    }

    #[test]
    fn quit_action_requests_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
