//! # Search Engine
//!
//! Substring search across the normalized text of every cached fragment.
//!
//! Two stages, in priority order:
//!
//! 1. **Hidden keywords**: a static table of trigger strings that redirect
//!    the query to a fixed page instead of searching. The whole query is
//!    tried first, then its first whitespace-delimited token.
//! 2. **Full-text scan**: case-insensitive substring match over each
//!    fragment's normalized text, in store insertion order. The first match
//!    per fragment produces one snippet with every in-window occurrence of
//!    the query highlighted.
//!
//! Matching works in character space, folding case per character. Locale
//! edge cases where lowercasing changes the character count are deliberately
//! approximated, the same trade the rest of the snippet logic makes.

use crate::content::{FragmentStore, NavEntry};

/// Characters of context kept before the match start.
pub const SNIPPET_LEAD: usize = 60;
/// Total snippet window length in characters, clipped to the text bounds.
pub const SNIPPET_SPAN: usize = 120;

/// Lowercase trigger -> target page key. Consulted before any text search;
/// not editable at runtime.
pub const HIDDEN_KEYWORDS: &[(&str, &str)] = &[("secret", "join"), ("秘密", "join")];

/// One search result: a page plus a highlighted context snippet. Ephemeral,
/// recomputed on every search, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub key: String,
    pub title: String,
    pub snippet: Vec<SnippetSpan>,
}

/// A run of snippet text; highlighted runs are query occurrences.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetSpan {
    pub text: String,
    pub highlight: bool,
}

impl SnippetSpan {
    fn plain(text: String) -> Self {
        Self { text, highlight: false }
    }

    fn mark(text: String) -> Self {
        Self { text, highlight: true }
    }
}

/// Resolve a query against the hidden keyword table: the trimmed lowercase
/// query first, then its first token.
pub fn keyword_target(query: &str) -> Option<&'static str> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }
    let lookup = |needle: &str| {
        HIDDEN_KEYWORDS
            .iter()
            .find(|(trigger, _)| *trigger == needle)
            .map(|(_, target)| *target)
    };
    lookup(&q).or_else(|| q.split_whitespace().next().and_then(lookup))
}

/// Scan every cached fragment for the query, in store insertion order.
/// Each matching fragment contributes exactly one hit.
pub fn search_store(store: &FragmentStore, nav: &[NavEntry], query: &str) -> Vec<SearchHit> {
    let folded_query: Vec<char> = query.trim().chars().map(fold).collect();
    if folded_query.is_empty() {
        return Vec::new();
    }

    store
        .iter()
        .filter_map(|(key, fragment)| {
            first_match_snippet(&fragment.text, &folded_query).map(|snippet| SearchHit {
                key: key.to_string(),
                title: nav
                    .iter()
                    .find(|entry| entry.key == key)
                    .map(|entry| entry.name.clone())
                    .unwrap_or_else(|| key.to_string()),
                snippet,
            })
        })
        .collect()
}

/// Locate the first case-insensitive occurrence of the query in `text` and
/// build the highlighted context window around it. `None` when absent.
///
/// The window keeps up to [`SNIPPET_LEAD`] characters before the match and
/// runs [`SNIPPET_SPAN`] characters total, clipped to the text bounds. Every
/// occurrence that falls entirely inside the window is highlighted, not just
/// the one that anchored it (a known cosmetic approximation).
fn first_match_snippet(text: &str, folded_query: &[char]) -> Option<Vec<SnippetSpan>> {
    let chars: Vec<char> = text.chars().collect();
    if folded_query.is_empty() || chars.len() < folded_query.len() {
        return None;
    }
    let folded: Vec<char> = chars.iter().map(|&c| fold(c)).collect();

    let first = folded
        .windows(folded_query.len())
        .position(|window| window == folded_query)?;

    let start = first.saturating_sub(SNIPPET_LEAD);
    let end = (start + SNIPPET_SPAN).min(chars.len());

    let mut spans = Vec::new();
    let mut cursor = start;
    let mut i = start;
    while i + folded_query.len() <= end {
        if folded[i..i + folded_query.len()] == *folded_query {
            if cursor < i {
                spans.push(SnippetSpan::plain(chars[cursor..i].iter().collect()));
            }
            spans.push(SnippetSpan::mark(
                chars[i..i + folded_query.len()].iter().collect(),
            ));
            i += folded_query.len();
            cursor = i;
        } else {
            i += 1;
        }
    }
    if cursor < end {
        spans.push(SnippetSpan::plain(chars[cursor..end].iter().collect()));
    }

    Some(spans)
}

/// Per-character case fold. Multi-character expansions keep their first
/// character so positions stay aligned with the original text.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Fragment, FragmentStore};

    fn store_with(pages: &[(&str, &str)]) -> FragmentStore {
        let mut store = FragmentStore::new();
        for (key, text) in pages {
            store.insert(
                key.to_string(),
                Fragment::from_markup(format!("<p>{text}</p>")),
            );
        }
        store
    }

    fn joined(snippet: &[SnippetSpan]) -> String {
        snippet.iter().map(|span| span.text.as_str()).collect()
    }

    #[test]
    fn keyword_matches_full_query_case_insensitively() {
        assert_eq!(keyword_target("secret"), Some("join"));
        assert_eq!(keyword_target("SECRET"), Some("join"));
        assert_eq!(keyword_target("  Secret  "), Some("join"));
        assert_eq!(keyword_target("秘密"), Some("join"));
        assert_eq!(keyword_target("open"), None);
        assert_eq!(keyword_target(""), None);
    }

    #[test]
    fn keyword_falls_back_to_first_token() {
        assert_eq!(keyword_target("secret handshake"), Some("join"));
        assert_eq!(keyword_target("the secret"), None);
    }

    #[test]
    fn single_match_is_highlighted_with_context() {
        let store = store_with(&[("home", "prelude alpha beta gamma coda")]);
        let hits = search_store(&store, &[], "beta");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key, "home");
        let marks: Vec<&SnippetSpan> =
            hits[0].snippet.iter().filter(|span| span.highlight).collect();
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].text, "beta");
        assert_eq!(joined(&hits[0].snippet), "prelude alpha beta gamma coda");
    }

    #[test]
    fn match_is_case_insensitive_both_ways() {
        let store = store_with(&[("home", "Alpha BETA gamma")]);
        let hits = search_store(&store, &[], "beta");
        assert_eq!(hits.len(), 1);
        let mark = hits[0].snippet.iter().find(|s| s.highlight).unwrap();
        assert_eq!(mark.text, "BETA");

        let hits = search_store(&store, &[], "ALPHA");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn window_is_clipped_to_documented_limits() {
        let lead = "x".repeat(200);
        let tail = "y".repeat(200);
        let text = format!("{lead} needle {tail}");
        let store = store_with(&[("home", text.as_str())]);

        let hits = search_store(&store, &[], "needle");
        let snippet = joined(&hits[0].snippet);
        assert_eq!(snippet.chars().count(), SNIPPET_SPAN);
        // 60 chars of lead context survive before the match.
        assert_eq!(snippet.chars().position(|c| c == 'n'), Some(SNIPPET_LEAD));
    }

    #[test]
    fn window_near_text_start_keeps_full_tail() {
        let text = format!("needle {}", "y".repeat(300));
        let store = store_with(&[("home", text.as_str())]);

        let hits = search_store(&store, &[], "needle");
        let snippet = joined(&hits[0].snippet);
        assert!(snippet.starts_with("needle"));
        assert_eq!(snippet.chars().count(), SNIPPET_SPAN);
    }

    #[test]
    fn every_occurrence_inside_the_window_is_marked() {
        let store = store_with(&[("home", "ash tree, ash pile, ash cloud")]);
        let hits = search_store(&store, &[], "ash");

        let marks = hits[0].snippet.iter().filter(|s| s.highlight).count();
        assert_eq!(marks, 3);
    }

    #[test]
    fn each_fragment_contributes_one_hit_in_store_order() {
        let store = store_with(&[
            ("home", "alpha alpha alpha"),
            ("about", "nothing here"),
            ("join", "alpha again"),
        ]);
        let hits = search_store(&store, &[], "alpha");

        let keys: Vec<&str> = hits.iter().map(|h| h.key.as_str()).collect();
        assert_eq!(keys, ["home", "join"]);
    }

    #[test]
    fn titles_come_from_nav_with_key_fallback() {
        let nav = vec![NavEntry {
            key: "join".to_string(),
            name: "Join Us".to_string(),
        }];
        let store = store_with(&[("home", "alpha"), ("join", "alpha")]);
        let hits = search_store(&store, &nav, "alpha");

        assert_eq!(hits[0].title, "home");
        assert_eq!(hits[1].title, "Join Us");
    }

    #[test]
    fn no_match_yields_no_hits() {
        let store = store_with(&[("home", "alpha beta")]);
        assert!(search_store(&store, &[], "zeta").is_empty());
        assert!(search_store(&store, &[], "   ").is_empty());
    }

    #[test]
    fn cjk_queries_match() {
        let store = store_with(&[("join", "欢迎 加入我们 的团队")]);
        let hits = search_store(&store, &[], "加入");
        assert_eq!(hits.len(), 1);
        let mark = hits[0].snippet.iter().find(|s| s.highlight).unwrap();
        assert_eq!(mark.text, "加入");
    }
}
