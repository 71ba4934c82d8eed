//! # Entry Document
//!
//! The site's `index.html` is fetched exactly once, at startup. Everything
//! the shell needs to boot comes out of it:
//!
//! - the home fragment (the content container's markup, cached synchronously
//!   so navigating home never touches the network),
//! - the navigation entries (page key + display name per nav link),
//! - the banner slide captions.

use std::sync::LazyLock;

use log::warn;
use scraper::{Html, Selector};

use crate::content::fetcher::PageLoadError;
use crate::content::fragment::{Fragment, collapse_whitespace};

/// Id of the container the router overwrites wholesale with page content.
const CONTENT_CONTAINER_SELECTOR: &str = "#content-container";
/// Navigation links carrying a page key and a visible display name.
const NAV_LINK_SELECTOR: &str = "#nav a[data-page]";
/// Banner slides, in carousel order.
const SLIDE_SELECTOR: &str = ".banner-slide";

static CONTENT_CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(CONTENT_CONTAINER_SELECTOR).expect("valid selector"));
static NAV_LINKS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(NAV_LINK_SELECTOR).expect("valid selector"));
static SLIDES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(SLIDE_SELECTOR).expect("valid selector"));

/// One navigation link: stable page key plus human-readable display name.
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub key: String,
    pub name: String,
}

/// Everything parsed out of the entry document.
#[derive(Debug)]
pub struct SiteIndex {
    pub home: Fragment,
    pub nav: Vec<NavEntry>,
    pub slides: Vec<String>,
}

/// Parse the entry document into the pieces the shell boots from.
///
/// A missing content container is fatal (`PageLoadError::Parse`), since nothing
/// can render without it. An empty nav list is tolerated but logged; the
/// site is then home-only and search covers home alone.
pub fn parse_site_index(html: &str) -> Result<SiteIndex, PageLoadError> {
    let doc = Html::parse_document(html);

    let container = doc
        .select(&CONTENT_CONTAINER)
        .next()
        .ok_or_else(|| PageLoadError::Parse("missing #content-container".to_string()))?;
    let home = Fragment::from_markup(container.inner_html());

    let nav: Vec<NavEntry> = doc
        .select(&NAV_LINKS)
        .filter_map(|link| {
            let key = link.value().attr("data-page")?.trim();
            if key.is_empty() {
                return None;
            }
            let name = collapse_whitespace(&link.text().collect::<String>());
            Some(NavEntry {
                key: key.to_string(),
                name: if name.is_empty() { key.to_string() } else { name },
            })
        })
        .collect();
    if nav.is_empty() {
        warn!("entry document has no navigation links; site is home-only");
    }

    let slides: Vec<String> = doc
        .select(&SLIDES)
        .enumerate()
        .map(|(i, slide)| {
            let caption = collapse_whitespace(&slide.text().collect::<String>());
            if caption.is_empty() { format!("Slide {}", i + 1) } else { caption }
        })
        .collect();

    Ok(SiteIndex { home, nav, slides })
}

impl SiteIndex {
    /// Keys of every page reachable through navigation, home excluded.
    /// This is the set the bulk pre-cache walks before a search.
    pub fn page_keys(&self) -> Vec<String> {
        self.nav
            .iter()
            .filter(|entry| entry.key != crate::core::state::HOME_KEY)
            .map(|entry| entry.key.clone())
            .collect()
    }
}
