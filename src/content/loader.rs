//! # Fragment Loader
//!
//! Turns raw page documents into cached [`Fragment`]s. Two paths:
//!
//! - [`load_fragment`]: single page, invoked on a cache miss during
//!   navigation. Any failure propagates — the router renders it as the
//!   error panel.
//! - [`ensure_all_cached`] / [`fetch_missing`]: bulk pre-cache ahead of a
//!   search. All pending pages are fetched concurrently and individual
//!   failures are swallowed; a page that cannot be loaded is simply absent
//!   from the store and therefore from search results.

use futures::future::join_all;
use log::{debug, warn};

use crate::content::fetcher::{PageFetcher, PageLoadError};
use crate::content::fragment::{Fragment, extract_renderable};
use crate::content::store::FragmentStore;

/// Fetch and assemble a single page fragment.
pub async fn load_fragment(
    fetcher: &dyn PageFetcher,
    key: &str,
) -> Result<Fragment, PageLoadError> {
    let html = fetcher.fetch_page(key).await?;
    let markup = extract_renderable(&html).ok_or(PageLoadError::Empty)?;
    debug!(
        "loaded page '{}' via {} ({} bytes of markup)",
        key,
        fetcher.name(),
        markup.len()
    );
    Ok(Fragment::from_markup(markup))
}

/// Fetch every listed page concurrently, returning the ones that loaded.
///
/// Failures are logged and dropped: partial results are the accepted
/// outcome here, never an error. The returned pairs preserve the order of
/// `keys`, so store insertion stays deterministic.
pub async fn fetch_missing(
    fetcher: &dyn PageFetcher,
    keys: Vec<String>,
) -> Vec<(String, Fragment)> {
    if keys.is_empty() {
        return Vec::new();
    }

    let loads = keys.iter().map(|key| load_fragment(fetcher, key));
    let results = join_all(loads).await;

    keys.into_iter()
        .zip(results)
        .filter_map(|(key, result)| match result {
            Ok(fragment) => Some((key, fragment)),
            Err(e) => {
                warn!("skipping unloadable page '{}': {}", key, e);
                None
            }
        })
        .collect()
}

/// Make sure every listed page is cached, fetching the missing ones
/// concurrently. Waits for all fetches to settle before returning.
pub async fn ensure_all_cached(
    store: &mut FragmentStore,
    fetcher: &dyn PageFetcher,
    keys: &[String],
) {
    let missing: Vec<String> = keys
        .iter()
        .filter(|key| !store.contains(key))
        .cloned()
        .collect();

    for (key, fragment) in fetch_missing(fetcher, missing).await {
        store.insert(key, fragment);
    }
}
