//! # Fragments
//!
//! A [`Fragment`] is one cached unit of page content: the renderable markup
//! plus the normalized plain text the search engine scans. The text is always
//! derived from the markup by the same rule; [`Fragment::from_markup`] is the
//! only constructor, so the two can never drift apart.
//!
//! Content extraction and text normalization both operate on parsed documents
//! (the `scraper` crate), never on the rendering substrate, so everything in
//! this module is unit-testable without a terminal.

use std::sync::LazyLock;

use scraper::{Html, Selector};

/// Attribute/class markers that exclude a node's subtree from search text.
/// Content authors opt out of indexing with `data-noindex` or `class="noindex"`.
const NOINDEX_SELECTOR: &str = "[data-noindex], .noindex";

/// Marker class used by the secondary extraction step: pages whose content
/// rows live outside the body's direct children carry `class="row"`.
const ROW_SELECTOR: &str = ".row";

static BODY_CHILDREN: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body > *").expect("valid selector"));
static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").expect("valid selector"));
static ROWS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(ROW_SELECTOR).expect("valid selector"));
static NOINDEX: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(NOINDEX_SELECTOR).expect("valid selector"));

/// A cached, renderable unit of page content plus its searchable text.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Serialized renderable markup (the union of the page's content nodes).
    pub markup: String,
    /// Normalized plain text: non-indexable nodes removed, markup stripped,
    /// whitespace collapsed to single spaces, trimmed.
    pub text: String,
}

impl Fragment {
    /// Build a fragment from renderable markup, deriving the searchable text.
    pub fn from_markup(markup: String) -> Self {
        let text = indexable_text(&markup);
        Self { markup, text }
    }
}

/// Extract the renderable subset of a fetched page document.
///
/// Ordered policy:
/// 1. The serialized direct element children of `<body>`, in document order.
/// 2. Else, the serialized `.row`-marked elements anywhere in the document,
///    in document order.
/// 3. Else, the body's inner markup as-is.
///
/// Returns `None` when all three steps produce an empty string.
pub fn extract_renderable(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);

    let mut content: String = doc.select(&BODY_CHILDREN).map(|el| el.html()).collect();

    if content.is_empty() {
        content = doc.select(&ROWS).map(|el| el.html()).collect();
    }

    if content.is_empty()
        && let Some(body) = doc.select(&BODY).next()
    {
        content = body.inner_html();
    }

    if content.is_empty() { None } else { Some(content) }
}

/// Normalize markup into searchable plain text.
///
/// Parses a detached copy of the markup, removes every subtree carrying a
/// non-indexable marker, reads the combined text content, then collapses
/// whitespace runs to single spaces and trims. Idempotent on plain text.
pub fn indexable_text(markup: &str) -> String {
    let mut doc = Html::parse_fragment(markup);

    // Detach excluded subtrees before reading text. Nodes listed by the
    // selector can be nested inside each other; detaching an already-detached
    // node is a no-op, so the id list doesn't need de-duplication.
    let excluded: Vec<_> = doc.select(&NOINDEX).map(|el| el.id()).collect();
    for id in excluded {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }

    let raw: String = doc.root_element().text().collect();
    collapse_whitespace(&raw)
}

/// Collapse all whitespace runs to single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
